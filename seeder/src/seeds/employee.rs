use crate::seed::Seeder;
use async_trait::async_trait;
use db::models::employee::{Model, NewEmployee};
use fake::{Fake, faker::name::en::Name};
use sea_orm::DatabaseConnection;

const CLASSES: &[&str] = &["A1", "A2", "B1", "B2", "C1"];
const SUBJECTS: &[&str] = &[
    "Math",
    "Physics",
    "Chemistry",
    "Biology",
    "History",
    "Art",
    "Economics",
];

pub struct EmployeeSeeder;

#[async_trait]
impl Seeder for EmployeeSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), String> {
        for _ in 0..25 {
            let name: String = Name().fake();
            let class = CLASSES[fastrand::usize(..CLASSES.len())].to_string();

            let mut subjects = Vec::new();
            for _ in 0..fastrand::usize(1..=3) {
                let subject = SUBJECTS[fastrand::usize(..SUBJECTS.len())].to_string();
                if !subjects.contains(&subject) {
                    subjects.push(subject);
                }
            }

            let data = NewEmployee {
                name,
                age: fastrand::i32(21..=60),
                class,
                subjects,
                attendance: fastrand::u32(400..=1000) as f64 / 10.0,
            };

            Model::create(db, data).await.map_err(|e| e.to_string())?;
        }

        Ok(())
    }
}
