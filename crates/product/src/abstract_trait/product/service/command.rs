use crate::{
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
    domain::response::product::ProductResponse,
};
use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ServiceError};
use std::sync::Arc;

pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn update_product(
        &self,
        req: &UpdateProductRequest,
        id: i32,
    ) -> Result<(), ServiceError>;
    async fn delete_product(&self, id: i32) -> Result<(), ServiceError>;
    async fn update_stock(&self, id: i32, stock: i32) -> Result<(), ServiceError>;
}
