use std::net::SocketAddr;

use login_gateway::{app, config::AppConfig, demo_verifier};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Configuration error: {}", e);
        e
    })?;
    info!(
        "Simulated credential lookup delay: {} ms",
        config.login_delay.as_millis()
    );

    let app = app(&config, demo_verifier(&config));

    // Try consecutive ports until one binds
    let last_port = config.port.saturating_add(config.port_attempts - 1);
    for port in config.port..=last_port {
        let addr = SocketAddr::new(config.host, port);
        match axum::Server::try_bind(&addr) {
            Ok(server) => {
                info!("Server listening on http://{}", addr);
                info!("Login endpoint: POST http://{}/api/login", addr);
                if config.api_docs {
                    info!("API Documentation: http://{}/docs", addr);
                }
                return server
                    .serve(app.into_make_service())
                    .await
                    .map_err(|e| e.into());
            }
            Err(e) => warn!("Failed to bind {}: {}", addr, e),
        }
    }

    Err("Failed to bind to any port".into())
}
