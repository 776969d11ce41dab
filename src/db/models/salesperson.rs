//! Salesperson Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Salesperson ID type
pub type SalespersonId = RecordId;

/// Salesperson model matching the `salespersons` partition schema
///
/// The stored record carries the argon2 password hash; use
/// [`SalespersonResponse`] for anything that leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Salesperson {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<SalespersonId>,
    pub name: String,
    /// Unique across the partition
    pub email: String,
    pub hash_pass: String,
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl Salesperson {
    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.hash_pass)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}

/// Create salesperson payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalespersonCreate {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Update salesperson payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalespersonUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Salesperson projection without the password hash
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalespersonResponse {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<SalespersonId>,
    pub name: String,
    pub email: String,
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl From<Salesperson> for SalespersonResponse {
    fn from(sp: Salesperson) -> Self {
        Self {
            id: sp.id,
            name: sp.name,
            email: sp.email,
            created_at: sp.created_at,
            updated_at: sp.updated_at,
        }
    }
}
