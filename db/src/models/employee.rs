use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, FromJsonQueryResult, QueryOrder,
    QuerySelect, Set,
};
use serde::{Deserialize, Serialize};

/// First display number handed out when the roster is empty.
pub const FIRST_EMPLOYEE_ID: i64 = 1001;

/// Attempts at recomputing the next display number when an insert loses the
/// race on the unique index.
const MAX_ID_RETRIES: u32 = 3;

/// Ordered list of subjects, stored as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct SubjectList(pub Vec<String>);

/// Represents an employee in the `employees` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    /// Primary key ID (auto-incremented, never reused).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Sequential human-facing employee number, distinct from the primary key.
    #[sea_orm(unique)]
    pub employee_id: i64,
    pub name: String,
    pub age: i32,
    /// Department/group label.
    pub class: String,
    #[sea_orm(column_type = "Json")]
    pub subjects: SubjectList,
    /// Attendance percentage; 0-100 by convention, not enforced.
    pub attendance: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("No RelationDef implemented")
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields required to create an employee. The employee number is assigned by
/// [`Model::create`], never by the caller.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub age: i32,
    pub class: String,
    pub subjects: Vec<String>,
    pub attendance: f64,
}

impl Model {
    /// Computes the next sequential employee number: one past the current
    /// maximum, or [`FIRST_EMPLOYEE_ID`] when no employees exist.
    pub async fn next_employee_id(db: &DatabaseConnection) -> Result<i64, DbErr> {
        let max: Option<Option<i64>> = Entity::find()
            .select_only()
            .column_as(Column::EmployeeId.max(), "max_employee_id")
            .into_tuple()
            .one(db)
            .await?;

        Ok(max
            .flatten()
            .map(|m| m + 1)
            .unwrap_or(FIRST_EMPLOYEE_ID))
    }

    /// Creates an employee with the next sequential employee number.
    ///
    /// The number is recomputed and the insert retried when the unique index
    /// on `employee_id` reports a conflict, so concurrent creates cannot end
    /// up sharing a number.
    pub async fn create(db: &DatabaseConnection, data: NewEmployee) -> Result<Model, DbErr> {
        let mut attempts = 0;

        loop {
            let employee_id = Self::next_employee_id(db).await?;
            let now = Utc::now();

            let employee = ActiveModel {
                employee_id: Set(employee_id),
                name: Set(data.name.clone()),
                age: Set(data.age),
                class: Set(data.class.clone()),
                subjects: Set(SubjectList(data.subjects.clone())),
                attendance: Set(data.attendance),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            };

            match employee.insert(db).await {
                Ok(model) => return Ok(model),
                Err(e) if attempts < MAX_ID_RETRIES && is_employee_id_conflict(&e) => {
                    attempts += 1;
                    tracing::debug!(
                        employee_id,
                        attempts,
                        "employee number conflict, recomputing"
                    );
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Returns the distinct class values, sorted ascending.
    pub async fn unique_classes(db: &DatabaseConnection) -> Result<Vec<String>, DbErr> {
        Entity::find()
            .select_only()
            .column(Column::Class)
            .distinct()
            .order_by_asc(Column::Class)
            .into_tuple::<String>()
            .all(db)
            .await
    }
}

fn is_employee_id_conflict(err: &DbErr) -> bool {
    err.to_string().contains("employees.employee_id")
}
