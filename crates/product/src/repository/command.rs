use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use chrono::Utc;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // timestamp taken at the start of this write, never cached process-wide
        let now = Utc::now().naive_utc();

        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO products (name, price, stock, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING product_id, name, price, stock, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(req.price)
        .bind(req.stock)
        .bind(now)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product '{}': {err:?}", req.name);
            RepositoryError::from(err)
        })?;

        info!("✅ Created product ID {}", product.product_id);
        Ok(product)
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
        id: i32,
    ) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let now = Utc::now().naive_utc();

        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = $2, price = $3, stock = $4, updated_at = $5
            WHERE product_id = $1
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(req.price)
        .bind(req.stock)
        .bind(now)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product ID {id}: {err:?}");
            RepositoryError::from(err)
        })?;

        match result.rows_affected() {
            0 => Err(RepositoryError::NotFound),
            1 => {
                info!("🔄 Updated product ID {id}");
                Ok(())
            }
            n => Err(RepositoryError::Custom(format!(
                "product update affected {n} rows"
            ))),
        }
    }

    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete product ID {id}: {err:?}");
                RepositoryError::from(err)
            })?;

        match result.rows_affected() {
            0 => Err(RepositoryError::NotFound),
            1 => {
                info!("🗑️ Deleted product ID {id}");
                Ok(())
            }
            n => Err(RepositoryError::Custom(format!(
                "product delete affected {n} rows"
            ))),
        }
    }

    async fn update_stock(&self, id: i32, stock: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let now = Utc::now().naive_utc();

        let result = sqlx::query(
            r#"
            UPDATE products
            SET stock = $2, updated_at = $3
            WHERE product_id = $1
            "#,
        )
        .bind(id)
        .bind(stock)
        .bind(now)
        .execute(&mut *conn)
        .await
        .map_err(|err| match &err {
            sqlx::Error::Database(db) if db.is_check_violation() => {
                RepositoryError::Conflict("stock cannot be negative".into())
            }
            _ => {
                error!("❌ Failed to update stock for product ID {id}: {err:?}");
                RepositoryError::from(err)
            }
        })?;

        match result.rows_affected() {
            0 => Err(RepositoryError::NotFound),
            1 => {
                info!("📦 Updated stock for product ID {id} to {stock}");
                Ok(())
            }
            n => Err(RepositoryError::Custom(format!(
                "stock update affected {n} rows"
            ))),
        }
    }
}
