use std::sync::Arc;

mod domain;
mod infrastructure;
mod interfaces;
pub mod constants;
pub mod errors;
pub mod graceful_shutdown;
pub mod settings;

pub use domain::{entities, use_cases};
pub use infrastructure::{db, storage};
pub use interfaces::{handlers, repositories, routes};

use repositories::sqlx_repo::{SqlxEmployeeRepo, SqlxUserFeedRepo};
use storage::MediaStore;
use use_cases::{employee::EmployeeHandler, feed::FeedHandler};

pub struct AppState {
    pub employees: EmployeeHandler,
    pub feed: FeedHandler,
    pub media: MediaStore,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        AppState {
            employees: EmployeeHandler::new(Arc::new(SqlxEmployeeRepo::new(pool.clone()))),
            feed: FeedHandler::new(Arc::new(SqlxUserFeedRepo::new(pool))),
            media: MediaStore::new(config.upload_dir.clone()),
        }
    }
}
