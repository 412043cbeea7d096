use actix_web::{get, web, HttpResponse};

use crate::{errors::AppError, AppState};

/// Reading this feed advances the shared watermark: two back-to-back calls
/// with nothing registered in between return an empty array the second time.
#[get("/new-users")]
pub async fn new_users(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let rows = state.feed.poll_new_users().await?;
    Ok(HttpResponse::Ok().json(rows))
}

#[get("/all-users")]
pub async fn all_users(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let rows = state.feed.list_all_users().await?;
    Ok(HttpResponse::Ok().json(rows))
}
