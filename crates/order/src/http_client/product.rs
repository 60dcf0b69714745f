use crate::{
    abstract_trait::http_client::ProductHttpClientTrait,
    domain::response::product::ProductResponse,
};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::json;
use shared::{domain::responses::ApiResponse, errors::RepositoryError};
use tracing::error;

pub struct ProductHttpClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProductHttpClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl ProductHttpClientTrait for ProductHttpClient {
    async fn find_by_id(&self, id: i32) -> Result<ProductResponse, RepositoryError> {
        let url = format!("{}/products/{id}", self.base_url);

        let response = self.http.get(&url).send().await.map_err(|e| {
            error!("❌ Product service unreachable: {e:?}");
            RepositoryError::Custom(format!("product service request failed: {e}"))
        })?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(RepositoryError::NotFound),
            status if status.is_success() => {
                let body: ApiResponse<ProductResponse> = response.json().await.map_err(|e| {
                    error!("❌ Invalid product service response: {e:?}");
                    RepositoryError::Custom(format!("invalid product service response: {e}"))
                })?;
                Ok(body.data)
            }
            status => Err(RepositoryError::Custom(format!(
                "product service returned {status} for GET {url}"
            ))),
        }
    }

    async fn update_stock(&self, id: i32, stock: i32) -> Result<(), RepositoryError> {
        let url = format!("{}/products/{id}/stock", self.base_url);

        let response = self
            .http
            .put(&url)
            .json(&json!({ "stock": stock }))
            .send()
            .await
            .map_err(|e| {
                error!("❌ Product service unreachable: {e:?}");
                RepositoryError::Custom(format!("product service request failed: {e}"))
            })?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(RepositoryError::NotFound),
            StatusCode::CONFLICT => Err(RepositoryError::Conflict(format!(
                "stock write rejected for product {id}"
            ))),
            status if status.is_success() => Ok(()),
            status => Err(RepositoryError::Custom(format!(
                "product service returned {status} for PUT {url}"
            ))),
        }
    }
}
