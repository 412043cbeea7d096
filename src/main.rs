use actix_cors::Cors;
use actix_files::Files;
use actix_multipart::form::MultipartFormConfig;
use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use staffhub_backend::{
    constants::START_TIME, db::migrations::run_migrations, db::postgres::create_pool,
    graceful_shutdown::shutdown_signal, routes::configure_routes, settings::AppConfig, AppState,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = match AppConfig::new() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        }
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let pool = match create_pool(&config.database_url()).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {}", e);
            std::process::exit(1);
        }
    };

    // Serving requests against an uninitialized schema is never acceptable.
    if let Err(e) = run_migrations(&pool).await {
        tracing::error!("Schema initialization failed: {:#}", e);
        std::process::exit(1);
    }

    let upload_dir = config.upload_dir.clone();
    std::fs::create_dir_all(&upload_dir)?;

    let state = web::Data::new(AppState::new(&config, pool));
    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "Starting StaffHub API v{} on {} (started at {})",
        env!("CARGO_PKG_VERSION"),
        server_addr,
        START_TIME.to_rfc3339()
    );

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            // Extraction accepts more than 5 MiB so oversized uploads reach
            // the media handler and get the typed 413 instead of an opaque
            // multipart error.
            .app_data(MultipartFormConfig::default().total_limit(25 * 1024 * 1024))
            .wrap(TracingLogger::default())
            .wrap(NormalizePath::trim())
            .wrap(Cors::permissive())
            .configure(configure_routes)
            .service(Files::new("/uploads", upload_dir.clone()))
    })
    .workers(config.worker_count)
    .bind(server_addr)?
    .run();

    tokio::select! {
        res = server => res,
        _ = shutdown_signal() => Ok(()),
    }
}
