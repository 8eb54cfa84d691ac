use axum::extract::{Path, State};
use axum::response::Json;
use dt2_chain::U256;
use dt2_service::{DetailsView, NumberReply, UserView};
use serde_json::{json, Value};

use crate::dto::{
    DataBody, DetailsBody, MessageBody, NameBody, NumberBody, OptionalJson, SetBalanceBody,
    SetUserBody, ValidatedJson,
};
use crate::endpoint::HealthResponse;
use crate::error::{ServerError, ServerResult};
use crate::router::AppState;

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Info handler.
pub async fn info_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "name": "dt2-server",
        "version": env!("CARGO_PKG_VERSION"),
        "contract": state.contract,
    }))
}

pub async fn not_found() -> ServerError {
    ServerError::NotFound
}

// ---- message ----

pub async fn get_message(State(state): State<AppState>) -> ServerResult<Json<String>> {
    Ok(Json(state.service.message(None).await?))
}

pub async fn set_message(
    State(state): State<AppState>,
    ValidatedJson(message): ValidatedJson<MessageBody>,
) -> ServerResult<Json<String>> {
    Ok(Json(state.service.message(Some(&message)).await?))
}

// ---- numbers / names ----

pub async fn get_number(
    State(state): State<AppState>,
    Path(index): Path<String>,
) -> ServerResult<Json<Option<NumberReply>>> {
    // Any uint256 is a valid index; the ledger decides whether it is in range.
    let index = U256::from_str_radix(&index, 10)
        .map_err(|_| ServerError::Validation(format!("index must be a non-negative integer: {index}")))?;
    Ok(Json(state.service.number(Some(index), None).await?))
}

pub async fn add_number(
    State(state): State<AppState>,
    ValidatedJson(number): ValidatedJson<NumberBody>,
) -> ServerResult<Json<Option<NumberReply>>> {
    Ok(Json(state.service.number(None, Some(number)).await?))
}

pub async fn get_numbers(State(state): State<AppState>) -> ServerResult<Json<Vec<String>>> {
    Ok(Json(state.service.numbers().await?))
}

pub async fn get_names(State(state): State<AppState>) -> ServerResult<Json<Vec<String>>> {
    Ok(Json(state.service.names().await?))
}

pub async fn add_name(
    State(state): State<AppState>,
    ValidatedJson(name): ValidatedJson<NameBody>,
) -> ServerResult<Json<Vec<String>>> {
    Ok(Json(state.service.add_name(&name).await?))
}

// ---- mappings ----

pub async fn get_balance(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> ServerResult<Json<String>> {
    Ok(Json(state.service.balance(&address, None).await?))
}

pub async fn set_balance(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<SetBalanceBody>,
) -> ServerResult<Json<String>> {
    Ok(Json(
        state.service.balance(&body.address, Some(body.value)).await?,
    ))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> ServerResult<Json<UserView>> {
    Ok(Json(state.service.user(&address, None, None).await?))
}

pub async fn set_user(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<SetUserBody>,
) -> ServerResult<Json<UserView>> {
    let user = state
        .service
        .user(&body.address, body.name.as_deref(), body.age)
        .await?;
    Ok(Json(user))
}

// ---- bytes ----

pub async fn get_fixed(State(state): State<AppState>) -> ServerResult<Json<String>> {
    Ok(Json(state.service.fixed_data(None).await?))
}

pub async fn set_fixed(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<DataBody>,
) -> ServerResult<Json<String>> {
    Ok(Json(state.service.fixed_data(Some(&data)).await?))
}

pub async fn get_dynamic(State(state): State<AppState>) -> ServerResult<Json<String>> {
    Ok(Json(state.service.dynamic_data(None).await?))
}

pub async fn set_dynamic(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<DataBody>,
) -> ServerResult<Json<String>> {
    Ok(Json(state.service.dynamic_data(Some(&data)).await?))
}

// ---- details ----

pub async fn get_details(State(state): State<AppState>) -> ServerResult<Json<DetailsView>> {
    Ok(Json(state.service.details().await?))
}

/// The body is optional; `state` is read and ignored.
pub async fn patch_details(
    State(state): State<AppState>,
    OptionalJson(body): OptionalJson<DetailsBody>,
) -> ServerResult<Json<DetailsView>> {
    Ok(Json(state.service.patch_details(body.flatten()).await?))
}
