use crate::{
    abstract_trait::user::{repository::DynUserQueryRepository, service::UserQueryServiceTrait},
    domain::response::user::UserResponse,
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
pub struct UserQueryService {
    query: DynUserQueryRepository,
    context_timeout: Duration,
}

impl UserQueryService {
    pub fn new(query: DynUserQueryRepository, context_timeout: Duration) -> Self {
        Self {
            query,
            context_timeout,
        }
    }
}

#[async_trait]
impl UserQueryServiceTrait for UserQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<UserResponse>>, ServiceError> {
        let users = match timeout(self.context_timeout, self.query.find_all()).await {
            Err(_) => {
                error!("⏱️ Fetching users exceeded the store timeout");
                return Err(ServiceError::Timeout);
            }
            Ok(Err(e)) => {
                error!("❌ Failed to fetch all users: {e:?}");
                return Err(ServiceError::Repo(e));
            }
            Ok(Ok(users)) => users,
        };

        let data: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

        info!("✅ Found {} users", data.len());

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Users retrieved successfully".to_string(),
            data,
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let user = match timeout(self.context_timeout, self.query.find_by_id(id)).await {
            Err(_) => {
                error!("⏱️ Fetching user ID {id} exceeded the store timeout");
                return Err(ServiceError::Timeout);
            }
            Ok(Err(e)) => {
                error!("❌ Database error while finding user ID {id}: {e:?}");
                return Err(ServiceError::Repo(e));
            }
            Ok(Ok(None)) => {
                error!("❌ User not found with ID: {id}");
                return Err(ServiceError::Repo(RepositoryError::NotFound));
            }
            Ok(Ok(Some(user))) => user,
        };

        info!("✅ Found user '{}' (ID: {id})", user.username);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "User retrieved successfully".to_string(),
            data: UserResponse::from(user),
        })
    }
}
