use crate::{
    abstract_trait::product::{
        repository::DynProductCommandRepository, service::ProductCommandServiceTrait,
    },
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
    domain::response::product::ProductResponse,
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
pub struct ProductCommandService {
    command: DynProductCommandRepository,
    context_timeout: Duration,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository, context_timeout: Duration) -> Self {
        Self {
            command,
            context_timeout,
        }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🏗️ Creating product '{}'", req.name);

        let product = match timeout(self.context_timeout, self.command.create_product(req)).await {
            Err(_) => {
                error!("⏱️ Creating product '{}' exceeded the store timeout", req.name);
                return Err(ServiceError::Timeout);
            }
            Ok(Err(e)) => {
                error!("❌ Failed to create product '{}': {e:?}", req.name);
                return Err(ServiceError::Repo(e));
            }
            Ok(Ok(product)) => product,
        };

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product created successfully".to_string(),
            data: ProductResponse::from(product),
        })
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
        id: i32,
    ) -> Result<(), ServiceError> {
        info!("✏️ Updating product ID {id}");

        match timeout(self.context_timeout, self.command.update_product(req, id)).await {
            Err(_) => {
                error!("⏱️ Updating product ID {id} exceeded the store timeout");
                Err(ServiceError::Timeout)
            }
            Ok(Err(e)) => {
                error!("❌ Failed to update product ID {id}: {e:?}");
                Err(ServiceError::Repo(e))
            }
            Ok(Ok(())) => Ok(()),
        }
    }

    async fn delete_product(&self, id: i32) -> Result<(), ServiceError> {
        info!("🗑️ Deleting product ID {id}");

        match timeout(self.context_timeout, self.command.delete_product(id)).await {
            Err(_) => {
                error!("⏱️ Deleting product ID {id} exceeded the store timeout");
                Err(ServiceError::Timeout)
            }
            Ok(Err(e)) => {
                error!("❌ Failed to delete product ID {id}: {e:?}");
                Err(ServiceError::Repo(e))
            }
            Ok(Ok(())) => Ok(()),
        }
    }

    async fn update_stock(&self, id: i32, stock: i32) -> Result<(), ServiceError> {
        info!("📦 Setting stock for product ID {id} to {stock}");

        match timeout(self.context_timeout, self.command.update_stock(id, stock)).await {
            Err(_) => {
                error!("⏱️ Stock update for product ID {id} exceeded the store timeout");
                Err(ServiceError::Timeout)
            }
            Ok(Err(e)) => {
                error!("❌ Failed to update stock for product ID {id}: {e:?}");
                Err(ServiceError::Repo(e))
            }
            Ok(Ok(())) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::product::Product as ProductModel;
    use shared::errors::RepositoryError;
    use std::sync::Arc;

    /// Command repository that pretends no row matched any id.
    struct EmptyCommandRepository;

    #[async_trait]
    impl crate::abstract_trait::product::repository::ProductCommandRepositoryTrait
        for EmptyCommandRepository
    {
        async fn create_product(
            &self,
            req: &CreateProductRequest,
        ) -> Result<ProductModel, RepositoryError> {
            Ok(ProductModel {
                product_id: 1,
                name: req.name.clone(),
                price: req.price,
                stock: req.stock,
                created_at: None,
                updated_at: None,
            })
        }

        async fn update_product(
            &self,
            _req: &UpdateProductRequest,
            _id: i32,
        ) -> Result<(), RepositoryError> {
            Err(RepositoryError::NotFound)
        }

        async fn delete_product(&self, _id: i32) -> Result<(), RepositoryError> {
            Err(RepositoryError::NotFound)
        }

        async fn update_stock(&self, _id: i32, _stock: i32) -> Result<(), RepositoryError> {
            Err(RepositoryError::NotFound)
        }
    }

    #[tokio::test]
    async fn create_product_assigns_id_and_echoes_fields() {
        let service = ProductCommandService::new(
            Arc::new(EmptyCommandRepository),
            Duration::from_secs(2),
        );

        let response = service
            .create_product(&CreateProductRequest {
                name: "Smartphone".into(),
                price: 99999,
                stock: 100,
            })
            .await
            .expect("create should succeed");

        assert_eq!(response.data.id, 1);
        assert_eq!(response.data.stock, 100);
    }

    #[tokio::test]
    async fn update_stock_propagates_not_found() {
        let service = ProductCommandService::new(
            Arc::new(EmptyCommandRepository),
            Duration::from_secs(2),
        );

        let err = service.update_stock(99, 5).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));
    }
}
