use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use crate::{
    constants::START_TIME, entities::user_view::UserSummary, errors::AppError,
    repositories::users_feed::UserFeedRepository,
};

/// Single shared cursor over the `users` feed. Starts at process-start time
/// and is moved to "now" by every poll; it is never persisted, so a restart
/// rewinds it to the new process start.
pub struct Watermark {
    inner: Mutex<DateTime<Utc>>,
}

impl Watermark {
    pub fn starting_at(at: DateTime<Utc>) -> Self {
        Watermark {
            inner: Mutex::new(at),
        }
    }

    pub fn current(&self) -> DateTime<Utc> {
        *self.inner.lock()
    }

    pub fn advance_to(&self, at: DateTime<Utc>) {
        *self.inner.lock() = at;
    }
}

impl Default for Watermark {
    fn default() -> Self {
        Watermark::starting_at(*START_TIME)
    }
}

pub struct FeedHandler {
    pub repo: Arc<dyn UserFeedRepository>,
    pub watermark: Watermark,
}

impl FeedHandler {
    pub fn new(repo: Arc<dyn UserFeedRepository>) -> Self {
        FeedHandler {
            repo,
            watermark: Watermark::default(),
        }
    }

    /// Returns rows registered since the watermark and advances it.
    ///
    /// The read and the advance are deliberately not atomic, and there is no
    /// per-caller cursor: concurrent pollers race and can each miss or
    /// double-see rows relative to one another. Known hazard, kept as-is.
    pub async fn poll_new_users(&self) -> Result<Vec<UserSummary>, AppError> {
        let since = self.watermark.current();
        let rows = self.repo.created_since(since).await?;
        self.watermark.advance_to(Utc::now());
        Ok(rows)
    }

    /// Full listing, newest first. Does not touch the watermark.
    pub async fn list_all_users(&self) -> Result<Vec<UserSummary>, AppError> {
        self.repo.list_all_desc().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::users_feed::MockUserFeedRepository;

    fn row(username: &str) -> UserSummary {
        UserSummary {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            profile_image: None,
        }
    }

    #[actix_rt::test]
    async fn poll_advances_the_watermark() {
        let mut repo = MockUserFeedRepository::new();
        repo.expect_created_since().returning(|_| Ok(vec![row("a")]));

        let handler = FeedHandler::new(Arc::new(repo));
        let before = handler.watermark.current();

        let rows = handler.poll_new_users().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert!(handler.watermark.current() > before);
    }

    #[actix_rt::test]
    async fn second_poll_queries_from_the_advanced_watermark() {
        let mut repo = MockUserFeedRepository::new();
        let mut calls = Vec::new();
        repo.expect_created_since()
            .times(2)
            .returning_st(move |since| {
                calls.push(since);
                if calls.len() == 1 {
                    Ok(vec![row("a")])
                } else {
                    // The second poll's lower bound is after the first
                    // poll's, so with no new rows it comes back empty.
                    assert!(calls[1] > calls[0]);
                    Ok(vec![])
                }
            });

        let handler = FeedHandler::new(Arc::new(repo));
        assert_eq!(handler.poll_new_users().await.unwrap().len(), 1);
        assert!(handler.poll_new_users().await.unwrap().is_empty());
    }

    #[actix_rt::test]
    async fn list_all_users_leaves_the_watermark_alone() {
        let mut repo = MockUserFeedRepository::new();
        repo.expect_list_all_desc()
            .returning(|| Ok(vec![row("b"), row("a")]));

        let handler = FeedHandler::new(Arc::new(repo));
        let before = handler.watermark.current();

        let rows = handler.list_all_users().await.unwrap();
        assert_eq!(rows[0].username, "b");
        assert_eq!(handler.watermark.current(), before);
    }
}
