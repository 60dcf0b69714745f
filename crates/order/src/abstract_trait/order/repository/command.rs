use crate::{domain::requests::order::CreateOrderRequest, model::order::Order as OrderModel};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Inserts the order and returns it with the store-assigned id.
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<OrderModel, RepositoryError>;
}
