//! User rows and their public projection. The password hash never leaves
//! this module in serialized form.

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub user_name: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub created_at: NaiveDateTime,
    pub is_active: bool,
}

/// Fields accepted when seeding a user. The plaintext password is consumed
/// by `UserService::create` and stored only as a bcrypt hash.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_name: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

/// Public key set: identity and contact fields only. Credentials and the
/// bookkeeping columns (`created_at`, `is_active`) stay internal.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: i64,
    pub user_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl User {
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            user_name: self.user_name.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
        }
    }
}
