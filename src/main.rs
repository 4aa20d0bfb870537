// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, database, and start HTTP server

mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod services;
mod state;

use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use state::AppState;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    }

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info,sqlx=warn"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    log::info!("Starting student-reviews service...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Initialize database connection pool (creates the schema if absent)
    let pool = match config::init_db_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    // 5. Demo data only on request
    if config.seed_demo_data {
        if let Err(e) = db::seed_demo_data(&pool).await {
            log::error!("Failed to seed demo data: {}", e);
            std::process::exit(1);
        }
    }

    // 6. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let state = web::Data::new(AppState::new(pool, config));

    HttpServer::new(move || {
        App::new()
            // Application context (database pool and config)
            .app_data(state.clone())
            .app_data(handlers::json_config())
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::index_config)
            .configure(handlers::health_config)
            .configure(handlers::students_config)
            .configure(handlers::blogs_config)
            .service(Files::new("/static", &state.config().static_dir))
    })
    .bind(&server_addr)?
    .run()
    .await
}
