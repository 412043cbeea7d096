use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{info, warn};

const MAX_RETRIES: u32 = 5;

/// Connects with bounded exponential backoff so the service survives the
/// store coming up a few seconds after it (the usual compose ordering).
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let mut attempt = 0;
    let mut wait = Duration::from_secs(2);

    loop {
        match PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
        {
            Ok(pool) => {
                info!("Database connection established");
                return Ok(pool);
            }
            Err(e) if attempt < MAX_RETRIES => {
                attempt += 1;
                warn!(
                    "Database connection failed (attempt {attempt}/{MAX_RETRIES}): {e}. \
                     Retrying in {}s",
                    wait.as_secs()
                );
                tokio::time::sleep(wait).await;
                wait *= 2;
            }
            Err(e) => return Err(e),
        }
    }
}
