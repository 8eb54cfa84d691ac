use axum::routing::{get, patch, post};
use axum::Router;
use dt2_service::FieldService;

use crate::endpoint::endpoints;
use crate::handler;

/// Shared request state. Cloned per request; the ledger behind the service
/// is shared, not copied.
#[derive(Clone)]
pub struct AppState {
    pub service: FieldService,
    /// Contract address reported by `/info`, when known.
    pub contract: Option<String>,
}

impl AppState {
    pub fn new(service: FieldService) -> Self {
        Self {
            service,
            contract: None,
        }
    }
}

/// Build the axum router with all facade endpoints.
pub fn build_router(state: AppState) -> Router {
    let fields = Router::new()
        .route("/message", get(handler::get_message).patch(handler::set_message))
        .route("/number/:index", get(handler::get_number))
        .route("/number", post(handler::add_number))
        .route("/numbers", get(handler::get_numbers))
        .route("/names", get(handler::get_names))
        .route("/name", post(handler::add_name))
        .route("/balance/:address", get(handler::get_balance))
        .route("/balance", patch(handler::set_balance))
        .route("/user/:address", get(handler::get_user))
        .route("/user", post(handler::set_user))
        .route("/fixed", get(handler::get_fixed).post(handler::set_fixed))
        .route("/dynamic", get(handler::get_dynamic).post(handler::set_dynamic))
        .route("/details", get(handler::get_details).patch(handler::patch_details));

    Router::new()
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(endpoints::INFO, get(handler::info_handler))
        .nest(endpoints::DATATYPE2, fields)
        .fallback(handler::not_found)
        .with_state(state)
}
