pub mod get_test;
pub mod post_test;
pub mod put_test;

use db::models::employee::{Model as EmployeeModel, NewEmployee};
use sea_orm::DatabaseConnection;

/// Seeds a small fixed roster. Employee numbers are assigned in creation
/// order, so the first entry gets 1001 and so on.
pub async fn seed_roster(db: &DatabaseConnection) -> Vec<EmployeeModel> {
    let rows = [
        ("Ana", 30, "A1", vec!["Math", "Physics"], 92.5),
        ("Ben", 24, "B2", vec!["History"], 71.0),
        ("Cleo", 41, "A1", vec!["Chemistry"], 88.0),
        ("Dana", 35, "C3", vec!["Art", "Math"], 64.5),
        ("Elio", 28, "B2", vec!["Biology"], 79.25),
    ];

    let mut created = Vec::new();
    for (name, age, class, subjects, attendance) in rows {
        let employee = EmployeeModel::create(
            db,
            NewEmployee {
                name: name.to_string(),
                age,
                class: class.to_string(),
                subjects: subjects.into_iter().map(str::to_string).collect(),
                attendance,
            },
        )
        .await
        .expect("Failed to seed employee");
        created.push(employee);
    }
    created
}
