use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::response::product::ProductResponse,
};
use async_trait::async_trait;
use shared::{
    domain::responses::ApiResponse,
    errors::{RepositoryError, ServiceError},
};
use std::time::Duration;
use tokio::time::timeout;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryService {
    query: DynProductQueryRepository,
    context_timeout: Duration,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, context_timeout: Duration) -> Self {
        Self {
            query,
            context_timeout,
        }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        let products = match timeout(self.context_timeout, self.query.find_all()).await {
            Err(_) => {
                error!("⏱️ Fetching products exceeded the store timeout");
                return Err(ServiceError::Timeout);
            }
            Ok(Err(e)) => {
                error!("❌ Failed to fetch all products: {e:?}");
                return Err(ServiceError::Repo(e));
            }
            Ok(Ok(products)) => products,
        };

        let data: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();

        info!("✅ Found {} products", data.len());

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Products retrieved successfully".to_string(),
            data,
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = match timeout(self.context_timeout, self.query.find_by_id(id)).await {
            Err(_) => {
                error!("⏱️ Fetching product ID {id} exceeded the store timeout");
                return Err(ServiceError::Timeout);
            }
            Ok(Err(e)) => {
                error!("❌ Database error while finding product ID {id}: {e:?}");
                return Err(ServiceError::Repo(e));
            }
            Ok(Ok(None)) => {
                error!("❌ Product not found with ID: {id}");
                return Err(ServiceError::Repo(RepositoryError::NotFound));
            }
            Ok(Ok(Some(product))) => product,
        };

        info!("✅ Found product '{}' (ID: {id})", product.name);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product retrieved successfully".to_string(),
            data: ProductResponse::from(product),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::product::Product as ProductModel;
    use std::sync::Arc;

    struct StaticQueryRepository {
        products: Vec<ProductModel>,
    }

    fn product(id: i32, stock: i32) -> ProductModel {
        ProductModel {
            product_id: id,
            name: format!("product-{id}"),
            price: 1000,
            stock,
            created_at: None,
            updated_at: None,
        }
    }

    #[async_trait]
    impl crate::abstract_trait::product::repository::ProductQueryRepositoryTrait
        for StaticQueryRepository
    {
        async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError> {
            Ok(self.products.clone())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
            Ok(self.products.iter().find(|p| p.product_id == id).cloned())
        }
    }

    struct SlowQueryRepository;

    #[async_trait]
    impl crate::abstract_trait::product::repository::ProductQueryRepositoryTrait
        for SlowQueryRepository
    {
        async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(vec![])
        }

        async fn find_by_id(&self, _id: i32) -> Result<Option<ProductModel>, RepositoryError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(None)
        }
    }

    #[tokio::test]
    async fn find_by_id_returns_product() {
        let repo = Arc::new(StaticQueryRepository {
            products: vec![product(7, 10)],
        });
        let service = ProductQueryService::new(repo, Duration::from_secs(2));

        let response = service.find_by_id(7).await.expect("product should exist");
        assert_eq!(response.data.id, 7);
        assert_eq!(response.data.stock, 10);
    }

    #[tokio::test]
    async fn find_by_id_maps_missing_product_to_not_found() {
        let repo = Arc::new(StaticQueryRepository { products: vec![] });
        let service = ProductQueryService::new(repo, Duration::from_secs(2));

        let err = service.find_by_id(99).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn find_all_times_out_against_a_stalled_store() {
        let service =
            ProductQueryService::new(Arc::new(SlowQueryRepository), Duration::from_millis(50));

        let err = service.find_all().await.unwrap_err();
        assert!(matches!(err, ServiceError::Timeout));
    }
}
