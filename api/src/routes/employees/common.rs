use db::models::employee::Model as EmployeeModel;
use serde::Serialize;

#[derive(Debug, Serialize, Default)]
pub struct EmployeeResponse {
    pub id: i64,
    pub employee_id: i64,
    pub name: String,
    pub age: i32,
    pub class: String,
    pub subjects: Vec<String>,
    pub attendance: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<EmployeeModel> for EmployeeResponse {
    fn from(employee: EmployeeModel) -> Self {
        Self {
            id: employee.id,
            employee_id: employee.employee_id,
            name: employee.name,
            age: employee.age,
            class: employee.class,
            subjects: employee.subjects.0,
            attendance: employee.attendance,
            created_at: employee.created_at.to_rfc3339(),
            updated_at: employee.updated_at.to_rfc3339(),
        }
    }
}
