use crate::seed::Seeder;
use async_trait::async_trait;
use db::models::user::{Model, Role};
use sea_orm::DatabaseConnection;

pub struct UserSeeder;

#[async_trait]
impl Seeder for UserSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), String> {
        // Fixed admin user
        Model::create(db, "admin", "password123", Role::Admin)
            .await
            .map_err(|e| e.to_string())?;

        // Fixed regular user
        Model::create(db, "viewer", "password123", Role::User)
            .await
            .map_err(|e| e.to_string())?;

        Ok(())
    }
}
