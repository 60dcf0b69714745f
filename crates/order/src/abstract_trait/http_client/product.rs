use crate::domain::response::product::ProductResponse;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductHttpClient = Arc<dyn ProductHttpClientTrait + Send + Sync>;

/// The product store as seen from the order workflow: a snapshot read and an
/// absolute stock write, each its own failure domain.
#[async_trait]
pub trait ProductHttpClientTrait {
    async fn find_by_id(&self, id: i32) -> Result<ProductResponse, RepositoryError>;
    async fn update_stock(&self, id: i32, stock: i32) -> Result<(), RepositoryError>;
}
