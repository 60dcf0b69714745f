use crate::{
    abstract_trait::order::{repository::DynOrderQueryRepository, service::OrderQueryServiceTrait},
    domain::response::order::OrderResponse,
};
use async_trait::async_trait;
use shared::{
    domain::responses::ApiResponse,
    errors::ServiceError,
};
use std::time::Duration;
use tokio::time::timeout;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderQueryService {
    query: DynOrderQueryRepository,
    context_timeout: Duration,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository, context_timeout: Duration) -> Self {
        Self {
            query,
            context_timeout,
        }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        let orders = match timeout(self.context_timeout, self.query.find_all()).await {
            Err(_) => {
                error!("⏱️ Fetching orders exceeded the store timeout");
                return Err(ServiceError::Timeout);
            }
            Ok(Err(e)) => {
                error!("❌ Failed to fetch all orders: {e:?}");
                return Err(ServiceError::Repo(e));
            }
            Ok(Ok(orders)) => orders,
        };

        let data: Vec<OrderResponse> = orders.into_iter().map(OrderResponse::from).collect();

        info!("✅ Found {} orders", data.len());

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Orders retrieved successfully".to_string(),
            data,
        })
    }
}
