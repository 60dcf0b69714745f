use serde::{Deserialize, Serialize};

/// Product record as served by the product service.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub price: i64,
    pub stock: i32,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
    #[serde(rename = "updated_at")]
    pub updated_at: Option<String>,
}
