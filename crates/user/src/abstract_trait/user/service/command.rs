use crate::{
    domain::requests::user::{CreateUserRequest, UpdateUserRequest},
    domain::response::user::UserResponse,
};
use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ServiceError};
use std::sync::Arc;

pub type DynUserCommandService = Arc<dyn UserCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserCommandServiceTrait {
    async fn create_user(
        &self,
        req: &CreateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError>;
    async fn update_user(&self, req: &UpdateUserRequest, id: i32) -> Result<(), ServiceError>;
    async fn delete_user(&self, id: i32) -> Result<(), ServiceError>;
}
