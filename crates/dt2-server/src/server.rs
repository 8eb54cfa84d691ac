use axum::Router;
use dt2_service::FieldService;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::{build_router, AppState};

/// DataType2 REST facade server.
pub struct Dt2Server {
    config: ServerConfig,
    state: AppState,
}

impl Dt2Server {
    pub fn new(config: ServerConfig, service: FieldService) -> Self {
        Self {
            config,
            state: AppState::new(service),
        }
    }

    /// Report `contract` from `/info`.
    pub fn with_contract(mut self, contract: impl Into<String>) -> Self {
        self.state.contract = Some(contract.into());
        self
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router with request tracing and, if enabled, CORS.
    pub fn router(&self) -> Router {
        let router = build_router(self.state.clone()).layer(TraceLayer::new_for_http());
        if self.config.cors {
            router.layer(CorsLayer::permissive())
        } else {
            router
        }
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        tracing::info!("DataType2 facade listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
