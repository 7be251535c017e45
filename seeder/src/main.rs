use crate::seed::{Seeder, run_seeder};
use crate::seeds::{employee::EmployeeSeeder, user::UserSeeder};

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let db = db::connect().await;

    for (seeder, name) in [
        (Box::new(UserSeeder) as Box<dyn Seeder + Send + Sync>, "User"),
        (Box::new(EmployeeSeeder), "Employee"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
