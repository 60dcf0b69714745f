use crate::{
    abstract_trait::user::repository::UserCommandRepositoryTrait,
    domain::requests::user::{CreateUserRequest, UpdateUserRequest},
    model::user::User as UserModel,
};
use async_trait::async_trait;
use chrono::Utc;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct UserCommandRepository {
    db: ConnectionPool,
}

impl UserCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

fn map_unique_violation(err: sqlx::Error, email: &str) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            RepositoryError::AlreadyExists(format!("user with email '{email}' already exists"))
        }
        _ => RepositoryError::from(err),
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<UserModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // timestamp taken at the start of this write, never cached process-wide
        let now = Utc::now().naive_utc();

        let user = sqlx::query_as::<_, UserModel>(
            r#"
            INSERT INTO users (username, email, created_at, updated_at)
            VALUES ($1, $2, $3, $3)
            RETURNING user_id, username, email, created_at, updated_at
            "#,
        )
        .bind(&req.username)
        .bind(&req.email)
        .bind(now)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create user '{}': {err:?}", req.username);
            map_unique_violation(err, &req.email)
        })?;

        info!("✅ Created user ID {}", user.user_id);
        Ok(user)
    }

    async fn update_user(&self, req: &UpdateUserRequest, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let now = Utc::now().naive_utc();

        let result = sqlx::query(
            r#"
            UPDATE users
            SET username = $2, email = $3, updated_at = $4
            WHERE user_id = $1
            "#,
        )
        .bind(id)
        .bind(&req.username)
        .bind(&req.email)
        .bind(now)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update user ID {id}: {err:?}");
            map_unique_violation(err, &req.email)
        })?;

        match result.rows_affected() {
            0 => Err(RepositoryError::NotFound),
            1 => {
                info!("🔄 Updated user ID {id}");
                Ok(())
            }
            n => Err(RepositoryError::Custom(format!(
                "user update affected {n} rows"
            ))),
        }
    }

    async fn delete_user(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete user ID {id}: {err:?}");
                RepositoryError::from(err)
            })?;

        match result.rows_affected() {
            0 => Err(RepositoryError::NotFound),
            1 => {
                info!("🗑️ Deleted user ID {id}");
                Ok(())
            }
            n => Err(RepositoryError::Custom(format!(
                "user delete affected {n} rows"
            ))),
        }
    }
}
