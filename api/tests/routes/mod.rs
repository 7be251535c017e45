pub mod auth;
pub mod employees;
pub mod health_test;
