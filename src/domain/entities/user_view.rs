use serde::Serialize;

/// Read-only projection of the externally-owned `users` table. This service
/// never writes these rows; the registration system owns them.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct UserSummary {
    pub username: String,
    pub email: String,
    pub profile_image: Option<String>,
}
