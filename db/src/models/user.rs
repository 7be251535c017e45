use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use thiserror::Error;

/// Represents a user in the `users` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Securely hashed password string.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Role used for authorization decisions.
    pub role: Role,
    /// Timestamp when the user was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp when the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Enum representing a user's role.
///
/// Only `admin` authorizes employee write operations; everything else is
/// read-only.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_role")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    #[sea_orm(string_value = "admin")]
    Admin,

    #[default]
    #[sea_orm(string_value = "user")]
    User,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("No RelationDef implemented")
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Errors produced by user operations.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("A user with this username already exists")]
    DuplicateUsername,

    #[error("User not found")]
    NotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password hashing failed: {0}")]
    Hash(String),

    #[error(transparent)]
    Db(#[from] DbErr),
}

impl Model {
    /// Hashes a password with argon2 using a fresh random salt.
    pub fn hash_password(password: &str) -> Result<String, UserError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| UserError::Hash(e.to_string()))?;
        Ok(password_hash.to_string())
    }

    /// Verifies a password against the stored hash.
    pub fn verify_password(&self, password: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(&self.password_hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }

    /// Creates a new user with a hashed password.
    ///
    /// The unique constraint on `username` is the source of truth for
    /// duplicates; a violation maps to [`UserError::DuplicateUsername`].
    pub async fn create(
        db: &DatabaseConnection,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<Model, UserError> {
        let password_hash = Self::hash_password(password)?;
        let now = Utc::now();

        let user = ActiveModel {
            username: Set(username.to_string()),
            password_hash: Set(password_hash),
            role: Set(role),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        match user.insert(db).await {
            Ok(model) => Ok(model),
            Err(e) if e.to_string().contains("UNIQUE constraint failed") => {
                Err(UserError::DuplicateUsername)
            }
            Err(e) => Err(UserError::Db(e)),
        }
    }

    /// Looks up a user by username.
    pub async fn find_by_username(
        db: &DatabaseConnection,
        username: &str,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Username.eq(username))
            .one(db)
            .await
    }

    /// Verifies a username/password pair.
    ///
    /// Returns [`UserError::NotFound`] for an unknown username and
    /// [`UserError::InvalidCredentials`] for a wrong password.
    pub async fn verify_credentials(
        db: &DatabaseConnection,
        username: &str,
        password: &str,
    ) -> Result<Model, UserError> {
        let user = Self::find_by_username(db, username)
            .await?
            .ok_or(UserError::NotFound)?;

        if user.verify_password(password) {
            Ok(user)
        } else {
            Err(UserError::InvalidCredentials)
        }
    }
}
