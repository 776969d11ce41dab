//! Salesperson Repository
//!
//! Email uniqueness is enforced here, at the gateway boundary.

use super::{BaseRepository, RepoError, RepoResult, strip_table_prefix};
use crate::db::models::{Salesperson, SalespersonCreate, SalespersonUpdate};
use crate::utils::time::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "salespersons";

#[derive(Clone)]
pub struct SalespersonRepository {
    base: BaseRepository,
}

impl SalespersonRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all salespersons ordered by name
    pub async fn find_all(&self) -> RepoResult<Vec<Salesperson>> {
        let salespersons: Vec<Salesperson> = self
            .base
            .db()
            .query("SELECT * FROM salespersons ORDER BY name")
            .await?
            .take(0)?;
        Ok(salespersons)
    }

    /// Find salesperson by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Salesperson>> {
        let key = strip_table_prefix(TABLE, id);
        let sp: Option<Salesperson> = self.base.db().select((TABLE, key)).await?;
        Ok(sp)
    }

    /// Find salesperson by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Salesperson>> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM salespersons WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let salespersons: Vec<Salesperson> = result.take(0)?;
        Ok(salespersons.into_iter().next())
    }

    /// Create a new salesperson (hashes the password, rejects duplicate emails)
    pub async fn create(&self, data: SalespersonCreate) -> RepoResult<Salesperson> {
        if self.find_by_email(&data.email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Email '{}' already exists",
                data.email
            )));
        }

        let hash_pass = Salesperson::hash_password(&data.password)
            .map_err(|e| RepoError::Database(format!("Password hashing failed: {e}")))?;

        let sp = Salesperson {
            id: None,
            name: data.name,
            email: data.email,
            hash_pass,
            created_at: now_millis(),
            updated_at: None,
        };

        let created: Option<Salesperson> = self.base.db().create(TABLE).content(sp).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create salesperson".to_string()))
    }

    /// Update a salesperson; a changed email must stay unique
    pub async fn update(&self, id: &str, data: SalespersonUpdate) -> RepoResult<Salesperson> {
        let key = strip_table_prefix(TABLE, id).to_string();

        if let Some(ref email) = data.email
            && let Some(existing) = self.find_by_email(email).await?
            && existing.id.as_ref().map(|i| i.key().to_string()) != Some(key.clone())
        {
            return Err(RepoError::Duplicate(format!(
                "Email '{}' already exists",
                email
            )));
        }

        let hash_pass = match data.password {
            Some(ref password) => Some(
                Salesperson::hash_password(password)
                    .map_err(|e| RepoError::Database(format!("Password hashing failed: {e}")))?,
            ),
            None => None,
        };

        let mut set_parts: Vec<&str> = Vec::new();
        if data.name.is_some() {
            set_parts.push("name = $name");
        }
        if data.email.is_some() {
            set_parts.push("email = $email");
        }
        if hash_pass.is_some() {
            set_parts.push("hashPass = $hash_pass");
        }

        if set_parts.is_empty() {
            return self
                .find_by_id(&key)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Salesperson {} not found", id)));
        }
        set_parts.push("updatedAt = $updated_at");

        let query_str = format!(
            "UPDATE type::thing($table, $key) SET {} RETURN AFTER",
            set_parts.join(", ")
        );

        let mut query = self
            .base
            .db()
            .query(&query_str)
            .bind(("table", TABLE))
            .bind(("key", key))
            .bind(("updated_at", now_millis()));

        if let Some(v) = data.name {
            query = query.bind(("name", v));
        }
        if let Some(v) = data.email {
            query = query.bind(("email", v));
        }
        if let Some(v) = hash_pass {
            query = query.bind(("hash_pass", v));
        }

        let updated: Vec<Salesperson> = query.await?.take(0)?;
        updated
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Salesperson {} not found", id)))
    }

    /// Delete a salesperson permanently
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let key = strip_table_prefix(TABLE, id);
        let deleted: Option<Salesperson> = self.base.db().delete((TABLE, key)).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("Salesperson {} not found", id)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    async fn repo() -> SalespersonRepository {
        let db = db::open_memory().await.expect("in-memory db");
        SalespersonRepository::new(db)
    }

    fn ravi() -> SalespersonCreate {
        SalespersonCreate {
            name: "Ravi".to_string(),
            email: "ravi@toolworks.in".to_string(),
            password: "secret-pass".to_string(),
        }
    }

    fn priya() -> SalespersonCreate {
        SalespersonCreate {
            name: "Priya".to_string(),
            email: "priya@toolworks.in".to_string(),
            password: "another-pass".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_stores_hash_not_plaintext() {
        let repo = repo().await;
        let sp = repo.create(ravi()).await.unwrap();

        assert_ne!(sp.hash_pass, "secret-pass");
        assert!(sp.verify_password("secret-pass").unwrap());
        assert!(!sp.verify_password("wrong-pass").unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_on_create() {
        let repo = repo().await;
        repo.create(ravi()).await.unwrap();

        let result = repo
            .create(SalespersonCreate {
                name: "Ravi Again".to_string(),
                email: "ravi@toolworks.in".to_string(),
                password: "other-pass".to_string(),
            })
            .await;
        assert!(matches!(result, Err(RepoError::Duplicate(_))));

        // 只有第一条记录落库
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_to_existing_email_rejected() {
        let repo = repo().await;
        repo.create(ravi()).await.unwrap();
        let priya = repo.create(priya()).await.unwrap();
        let key = priya.id.as_ref().unwrap().key().to_string();

        let result = repo
            .update(
                &key,
                SalespersonUpdate {
                    name: None,
                    email: Some("ravi@toolworks.in".to_string()),
                    password: None,
                },
            )
            .await;
        assert!(matches!(result, Err(RepoError::Duplicate(_))));
    }

    #[tokio::test]
    async fn test_update_own_email_is_not_a_conflict() {
        let repo = repo().await;
        let priya = repo.create(priya()).await.unwrap();
        let key = priya.id.as_ref().unwrap().key().to_string();

        // 重新提交自己的邮箱不算重复
        let updated = repo
            .update(
                &key,
                SalespersonUpdate {
                    name: Some("Priya S".to_string()),
                    email: Some("priya@toolworks.in".to_string()),
                    password: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Priya S");
        assert_eq!(updated.email, "priya@toolworks.in");
    }

    #[tokio::test]
    async fn test_password_update_rehashes() {
        let repo = repo().await;
        let sp = repo.create(ravi()).await.unwrap();
        let key = sp.id.as_ref().unwrap().key().to_string();

        let updated = repo
            .update(
                &key,
                SalespersonUpdate {
                    name: None,
                    email: None,
                    password: Some("rotated-pass".to_string()),
                },
            )
            .await
            .unwrap();

        assert_ne!(updated.hash_pass, sp.hash_pass);
        assert!(updated.verify_password("rotated-pass").unwrap());
        assert!(!updated.verify_password("secret-pass").unwrap());
    }
}
