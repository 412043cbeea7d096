use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use humantime::format_duration;
use serde::Serialize;
use std::time::Duration;

use crate::{constants::START_TIME, AppState};

#[derive(Serialize)]
struct HealthCheckResponse {
    status: String,
    uptime: String,
    timestamp: String,
    start_at: String,
    database: String,
    version: String,
}

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    if let Err(e) = state.employees.repo.check_connection().await {
        return HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "Database unavailable",
            "details": e.to_string()
        }));
    }

    let now = Utc::now();
    let uptime = now.signed_duration_since(*START_TIME);
    let human_uptime = format_duration(Duration::from_secs(uptime.num_seconds().max(0) as u64));

    HttpResponse::Ok().json(HealthCheckResponse {
        status: "healthy".to_string(),
        uptime: human_uptime.to_string(),
        timestamp: now.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        database: "OK".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
