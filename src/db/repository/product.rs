//! Product Repository
//!
//! Owns the derived-pricing invariant: `final_price` is recomputed from
//! `raw_price` on every create and update, in the same write.

use super::{BaseRepository, RepoError, RepoResult, strip_table_prefix};
use crate::db::models::{Product, ProductCreate, ProductUpdate};
use crate::pricing::compute_final_price;
use crate::utils::time::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "products";

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all products, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM products ORDER BY createdAt DESC")
            .await?
            .take(0)?;
        Ok(products)
    }

    /// Find product by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        let key = strip_table_prefix(TABLE, id);
        let product: Option<Product> = self.base.db().select((TABLE, key)).await?;
        Ok(product)
    }

    /// Create a new product with the derived sale price
    pub async fn create(&self, data: ProductCreate) -> RepoResult<Product> {
        let product = Product {
            id: None,
            final_price: compute_final_price(data.raw_price),
            name: data.name,
            raw_price: data.raw_price,
            created_at: now_millis(),
            updated_at: None,
        };

        let created: Option<Product> = self.base.db().create(TABLE).content(product).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
    }

    /// Update a product; a raw price change recomputes the sale price in the same write
    pub async fn update(&self, id: &str, data: ProductUpdate) -> RepoResult<Product> {
        let key = strip_table_prefix(TABLE, id).to_string();

        let mut set_parts: Vec<&str> = Vec::new();
        if data.name.is_some() {
            set_parts.push("name = $name");
        }
        if data.raw_price.is_some() {
            set_parts.push("rawPrice = $raw_price");
            set_parts.push("finalPrice = $final_price");
        }

        if set_parts.is_empty() {
            return self
                .find_by_id(&key)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)));
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
        if let Some(v) = data.raw_price {
            query = query.bind(("raw_price", v));
            query = query.bind(("final_price", compute_final_price(v)));
        }

        let updated: Vec<Product> = query.await?.take(0)?;
        updated
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))
    }

    /// Delete a product permanently
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let key = strip_table_prefix(TABLE, id);
        let deleted: Option<Product> = self.base.db().delete((TABLE, key)).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("Product {} not found", id)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    async fn repo() -> ProductRepository {
        let db = db::open_memory().await.expect("in-memory db");
        ProductRepository::new(db)
    }

    #[tokio::test]
    async fn test_create_derives_final_price() {
        let repo = repo().await;
        let product = repo
            .create(ProductCreate {
                name: "Blade A".to_string(),
                raw_price: 100.0,
            })
            .await
            .unwrap();

        assert_eq!(product.final_price, 300.0);
        assert!(product.created_at > 0);
        assert!(product.updated_at.is_none());
    }

    #[tokio::test]
    async fn test_raw_price_update_recomputes_final_price() {
        let repo = repo().await;
        let product = repo
            .create(ProductCreate {
                name: "Blade A".to_string(),
                raw_price: 100.0,
            })
            .await
            .unwrap();
        let key = product.id.as_ref().unwrap().key().to_string();

        let updated = repo
            .update(
                &key,
                ProductUpdate {
                    name: None,
                    raw_price: Some(200.0),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.raw_price, 200.0);
        assert_eq!(updated.final_price, 600.0);
        assert!(updated.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_name_only_update_keeps_prices() {
        let repo = repo().await;
        let product = repo
            .create(ProductCreate {
                name: "Blade A".to_string(),
                raw_price: 150.0,
            })
            .await
            .unwrap();
        let key = product.id.as_ref().unwrap().key().to_string();

        let updated = repo
            .update(
                &key,
                ProductUpdate {
                    name: Some("Blade A (125mm)".to_string()),
                    raw_price: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Blade A (125mm)");
        assert_eq!(updated.raw_price, 150.0);
        assert_eq!(updated.final_price, 450.0);
    }

    #[tokio::test]
    async fn test_update_unknown_product_not_found() {
        let repo = repo().await;
        let result = repo
            .update(
                "missing",
                ProductUpdate {
                    name: Some("x".to_string()),
                    raw_price: None,
                },
            )
            .await;
        assert!(matches!(result, Err(RepoError::NotFound(_))));
    }
}
