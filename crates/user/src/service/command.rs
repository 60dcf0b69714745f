use crate::{
    abstract_trait::user::{repository::DynUserCommandRepository, service::UserCommandServiceTrait},
    domain::requests::user::{CreateUserRequest, UpdateUserRequest},
    domain::response::user::UserResponse,
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
pub struct UserCommandService {
    command: DynUserCommandRepository,
    context_timeout: Duration,
}

impl UserCommandService {
    pub fn new(command: DynUserCommandRepository, context_timeout: Duration) -> Self {
        Self {
            command,
            context_timeout,
        }
    }
}

#[async_trait]
impl UserCommandServiceTrait for UserCommandService {
    async fn create_user(
        &self,
        req: &CreateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        info!("🏗️ Creating user '{}'", req.username);

        let user = match timeout(self.context_timeout, self.command.create_user(req)).await {
            Err(_) => {
                error!("⏱️ Creating user '{}' exceeded the store timeout", req.username);
                return Err(ServiceError::Timeout);
            }
            Ok(Err(e)) => {
                error!("❌ Failed to create user '{}': {e:?}", req.username);
                return Err(ServiceError::Repo(e));
            }
            Ok(Ok(user)) => user,
        };

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "User created successfully".to_string(),
            data: UserResponse::from(user),
        })
    }

    async fn update_user(&self, req: &UpdateUserRequest, id: i32) -> Result<(), ServiceError> {
        info!("✏️ Updating user ID {id}");

        match timeout(self.context_timeout, self.command.update_user(req, id)).await {
            Err(_) => {
                error!("⏱️ Updating user ID {id} exceeded the store timeout");
                Err(ServiceError::Timeout)
            }
            Ok(Err(e)) => {
                error!("❌ Failed to update user ID {id}: {e:?}");
                Err(ServiceError::Repo(e))
            }
            Ok(Ok(())) => Ok(()),
        }
    }

    async fn delete_user(&self, id: i32) -> Result<(), ServiceError> {
        info!("🗑️ Deleting user ID {id}");

        match timeout(self.context_timeout, self.command.delete_user(id)).await {
            Err(_) => {
                error!("⏱️ Deleting user ID {id} exceeded the store timeout");
                Err(ServiceError::Timeout)
            }
            Ok(Err(e)) => {
                error!("❌ Failed to delete user ID {id}: {e:?}");
                Err(ServiceError::Repo(e))
            }
            Ok(Ok(())) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::user::User as UserModel;
    use shared::errors::RepositoryError;
    use std::sync::Arc;

    /// Command repository that reports every email as taken.
    struct DuplicateEmailRepository;

    #[async_trait]
    impl crate::abstract_trait::user::repository::UserCommandRepositoryTrait
        for DuplicateEmailRepository
    {
        async fn create_user(
            &self,
            req: &CreateUserRequest,
        ) -> Result<UserModel, RepositoryError> {
            Err(RepositoryError::AlreadyExists(format!(
                "user with email '{}' already exists",
                req.email
            )))
        }

        async fn update_user(
            &self,
            _req: &UpdateUserRequest,
            _id: i32,
        ) -> Result<(), RepositoryError> {
            Err(RepositoryError::NotFound)
        }

        async fn delete_user(&self, _id: i32) -> Result<(), RepositoryError> {
            Err(RepositoryError::NotFound)
        }
    }

    #[tokio::test]
    async fn duplicate_email_surfaces_already_exists() {
        let service = UserCommandService::new(
            Arc::new(DuplicateEmailRepository),
            Duration::from_secs(2),
        );

        let err = service
            .create_user(&CreateUserRequest {
                username: "janedoe".into(),
                email: "jane@example.com".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::AlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn update_missing_user_surfaces_not_found() {
        let service = UserCommandService::new(
            Arc::new(DuplicateEmailRepository),
            Duration::from_secs(2),
        );

        let err = service
            .update_user(
                &UpdateUserRequest {
                    username: "janedoe".into(),
                    email: "jane@example.com".into(),
                },
                42,
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));
    }
}
