use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    entities::user_view::UserSummary, errors::AppError,
    repositories::sqlx_repo::SqlxUserFeedRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserFeedRepository: Send + Sync {
    /// Rows registered strictly after `since`, in store-native order.
    async fn created_since(&self, since: DateTime<Utc>) -> Result<Vec<UserSummary>, AppError>;

    /// Every row, newest registration first.
    async fn list_all_desc(&self) -> Result<Vec<UserSummary>, AppError>;
}

impl SqlxUserFeedRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxUserFeedRepo { pool }
    }
}

#[async_trait]
impl UserFeedRepository for SqlxUserFeedRepo {
    async fn created_since(&self, since: DateTime<Utc>) -> Result<Vec<UserSummary>, AppError> {
        sqlx::query_as::<_, UserSummary>(
            "SELECT username, email, profile_image FROM users WHERE created_at > $1",
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn list_all_desc(&self) -> Result<Vec<UserSummary>, AppError> {
        sqlx::query_as::<_, UserSummary>(
            "SELECT username, email, profile_image FROM users ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }
}
