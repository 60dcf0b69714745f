use crate::{
    abstract_trait::order::repository::OrderCommandRepositoryTrait,
    domain::requests::order::CreateOrderRequest, model::order::Order as OrderModel,
};
use async_trait::async_trait;
use chrono::Utc;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<OrderModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // timestamp taken at the start of this write, never cached process-wide
        let now = Utc::now().naive_utc();

        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            INSERT INTO orders (product_id, user_id, qty, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING order_id, product_id, user_id, qty, created_at, updated_at
            "#,
        )
        .bind(req.product_id)
        .bind(req.user_id)
        .bind(req.qty)
        .bind(now)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create order for product {}: {err:?}",
                req.product_id
            );
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created order ID {} for product {} (user {})",
            order.order_id, order.product_id, order.user_id
        );
        Ok(order)
    }
}
