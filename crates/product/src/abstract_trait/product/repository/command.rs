use crate::{
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError>;
    async fn update_product(
        &self,
        req: &UpdateProductRequest,
        id: i32,
    ) -> Result<(), RepositoryError>;
    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError>;
    /// Absolute stock write. Must affect exactly one row.
    async fn update_stock(&self, id: i32, stock: i32) -> Result<(), RepositoryError>;
}
