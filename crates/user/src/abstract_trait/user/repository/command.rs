use crate::{
    domain::requests::user::{CreateUserRequest, UpdateUserRequest},
    model::user::User as UserModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynUserCommandRepository = Arc<dyn UserCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserCommandRepositoryTrait {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<UserModel, RepositoryError>;
    async fn update_user(&self, req: &UpdateUserRequest, id: i32) -> Result<(), RepositoryError>;
    async fn delete_user(&self, id: i32) -> Result<(), RepositoryError>;
}
