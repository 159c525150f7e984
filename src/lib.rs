pub mod backends;
pub mod config;
pub mod endpoints;
pub mod models;
pub mod services;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{self, prelude::*};

use crate::backends::HttpEmployeeBackend;
use crate::config::Config;
use crate::services::EmployeeFacade;

pub async fn run(config: Config) -> anyhow::Result<()> {
    // Initialize logging
    if config.logging.log_to_file {
        // Create a file appender
        let log_file = std::fs::File::create(&config.logging.log_file_path)
            .with_context(|| format!("Failed to create log file {}", config.logging.log_file_path))?;
        let file_appender = tracing_subscriber::fmt::layer()
            .with_file(true)
            .with_line_number(true)
            .with_writer(log_file);

        // Create a stdout appender
        let stdout_appender = tracing_subscriber::fmt::layer()
            .with_file(true)
            .with_line_number(true);

        // Combine both appenders
        tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::new(&config.proxy.log_level))
            .with(file_appender)
            .with(stdout_appender)
            .try_init()
            .expect("Failed to initialize logging");
    } else {
        // Just stdout if file logging is disabled
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new(&config.proxy.log_level))
            .with_file(true)
            .with_line_number(true)
            .init();
    }

    tracing::info!("🔧 Starting rostergate '{}'", config.proxy.id);
    tracing::info!("Employee backend at {}", config.backend.base_url);

    let backend = Arc::new(HttpEmployeeBackend::new(&config.backend));
    let facade = Arc::new(EmployeeFacade::new(backend));

    let app = endpoints::build_router(facade);

    // Parse the bind address from config
    let addr: SocketAddr = format!(
        "{}:{}",
        config.network.http.bind_address, config.network.http.bind_port
    )
    .parse()
    .context("Invalid bind address or port")?;

    tracing::info!("🚀 Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app)
        .await
        .context("HTTP server terminated")?;

    Ok(())
}
