use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    #[validate(range(min = 1))]
    #[serde(rename = "product_id")]
    #[schema(example = 7)]
    pub product_id: i32,

    // not checked against the user service; the order store records the
    // reference as given
    #[validate(range(min = 1))]
    #[serde(rename = "user_id")]
    #[schema(example = 1)]
    pub user_id: i32,

    #[validate(range(min = 1, message = "Quantity must be positive"))]
    #[schema(example = 4)]
    pub qty: i32,
}
