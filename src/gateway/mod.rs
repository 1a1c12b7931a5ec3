pub mod generate;

use crate::{
    config::Config,
    error::{GatewayError, Result},
    provider::ImageProvider,
};
use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use std::sync::Arc;

/// Shared handler state: the provider behind its seam. The gateway itself
/// holds nothing else; every request is independent.
pub struct GatewayState {
    pub provider: Arc<dyn ImageProvider>,
}

pub struct GatewayServer {
    config: Config,
    provider: Arc<dyn ImageProvider>,
}

impl GatewayServer {
    pub fn new(config: Config, provider: Arc<dyn ImageProvider>) -> Self {
        Self { config, provider }
    }

    pub async fn run(self) -> Result<()> {
        let port = self.config.port_or_default();
        let state = web::Data::new(GatewayState {
            provider: self.provider.clone(),
        });

        crate::logger::log_startup_info("dreamcanvas", env!("CARGO_PKG_VERSION"), port);

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .app_data(state.clone())
                .service(generate::generate)
        })
        .bind(("127.0.0.1", port))
        .map_err(|e| GatewayError::ConfigError(format!("Failed to bind port {}: {}", port, e)))?
        .run()
        .await
        .map_err(|e| GatewayError::InternalError(format!("Server error: {}", e)))
    }
}
