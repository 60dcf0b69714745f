use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Smartphone")]
    pub name: String,

    #[validate(range(min = 0, message = "Price cannot be negative"))]
    #[schema(example = 99999)]
    pub price: i64,

    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    #[schema(example = 100)]
    pub stock: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Smartphone")]
    pub name: String,

    #[validate(range(min = 0, message = "Price cannot be negative"))]
    #[schema(example = 99999)]
    pub price: i64,

    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    #[schema(example = 100)]
    pub stock: i32,
}

/// Body of the absolute stock write used by the order workflow for both
/// reservation and compensation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductStockRequest {
    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    #[schema(example = 6)]
    pub stock: i32,
}
