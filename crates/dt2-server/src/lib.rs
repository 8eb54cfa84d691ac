//! HTTP facade for the DataType2 contract.
//!
//! Maps REST routes under `/datatype2` onto [`dt2_service::FieldService`],
//! validates request bodies, and renders every failure as a
//! `{statusCode, message, error}` JSON body.

pub mod config;
pub mod dto;
pub mod endpoint;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::{AppConfig, ServerConfig, ENV_BIND_ADDR};
pub use error::{ServerError, ServerResult};
pub use router::{build_router, AppState};
pub use server::Dt2Server;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use axum::Router;
    use dt2_chain::InMemoryLedger;
    use dt2_service::FieldService;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::util::ServiceExt;

    const ALICE: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    fn app() -> Router {
        let service = FieldService::new(Arc::new(InMemoryLedger::new()));
        build_router(AppState::new(service))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn health_endpoint() {
        let (status, body) = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn info_endpoint() {
        let (status, body) = send(&app(), Method::GET, "/info", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "dt2-server");
        assert_eq!(body["contract"], Value::Null);
    }

    #[tokio::test]
    async fn message_read_and_update() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/datatype2/message", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Hello, Solidity!");

        let (status, body) = send(
            &app,
            Method::PATCH,
            "/datatype2/message",
            Some(json!({"message": "Hello, Insu!"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Hello, Insu!");
    }

    #[tokio::test]
    async fn numbers_append_and_index() {
        let app = app();
        let (status, body) = send(&app, Method::POST, "/datatype2/number", Some(json!({"number": 10}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(["10"]));

        send(&app, Method::POST, "/datatype2/number", Some(json!({"number": 20}))).await;
        let (_, body) = send(&app, Method::GET, "/datatype2/numbers", None).await;
        assert_eq!(body, json!(["10", "20"]));

        let (status, body) = send(&app, Method::GET, "/datatype2/number/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "20");
    }

    #[tokio::test]
    async fn out_of_range_index_is_a_bad_request() {
        let (status, body) = send(&app(), Method::GET, "/datatype2/number/5", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"statusCode": 400, "message": "Index out of bounds", "error": "Bad Request"})
        );
    }

    #[tokio::test]
    async fn index_beyond_u64_is_out_of_bounds() {
        let app = app();
        send(&app, Method::POST, "/datatype2/number", Some(json!({"number": 10}))).await;
        let (status, body) =
            send(&app, Method::GET, "/datatype2/number/18446744073709551616", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Index out of bounds");
    }

    #[tokio::test]
    async fn negative_index_is_a_validation_error() {
        let (status, body) = send(&app(), Method::GET, "/datatype2/number/-1", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "index must be a non-negative integer: -1");
    }

    #[tokio::test]
    async fn non_numeric_index_is_a_bad_request() {
        let (status, body) = send(&app(), Method::GET, "/datatype2/number/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["statusCode"], 400);
    }

    #[tokio::test]
    async fn wrong_body_type_is_rejected() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/datatype2/number",
            Some(json!({"number": "ten"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Bad Request");
    }

    #[tokio::test]
    async fn names_append() {
        let app = app();
        send(&app, Method::POST, "/datatype2/name", Some(json!({"name": "Alice"}))).await;
        let (status, body) =
            send(&app, Method::POST, "/datatype2/name", Some(json!({"name": "Bob"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(["Alice", "Bob"]));

        let (_, body) = send(&app, Method::GET, "/datatype2/names", None).await;
        assert_eq!(body, json!(["Alice", "Bob"]));
    }

    #[tokio::test]
    async fn balance_set_and_read() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::PATCH,
            "/datatype2/balance",
            Some(json!({"address": ALICE, "value": 10})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "10");

        let (_, body) = send(&app, Method::GET, &format!("/datatype2/balance/{ALICE}"), None).await;
        assert_eq!(body, "10");
    }

    #[tokio::test]
    async fn balance_requires_address() {
        let (status, body) = send(
            &app(),
            Method::PATCH,
            "/datatype2/balance",
            Some(json!({"value": 10})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "address should not be empty");
    }

    #[tokio::test]
    async fn malformed_address_is_a_bad_request() {
        let (status, _) = send(&app(), Method::GET, "/datatype2/balance/0x1234", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn user_lifecycle() {
        let app = app();
        let uri = format!("/datatype2/user/{ALICE}");
        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "User not found");

        let (status, body) = send(
            &app,
            Method::POST,
            "/datatype2/user",
            Some(json!({"address": ALICE, "name": "Alice", "age": 10})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"name": "Alice", "age": "10"}));

        let (_, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(body, json!({"name": "Alice", "age": "10"}));
    }

    #[tokio::test]
    async fn blank_user_name_is_rejected() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/datatype2/user",
            Some(json!({"address": ALICE, "name": "  ", "age": 10})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Name cannot be empty");
    }

    #[tokio::test]
    async fn fixed_data_round_trip() {
        let app = app();
        let (_, body) = send(&app, Method::GET, "/datatype2/fixed", None).await;
        assert_eq!(
            body,
            "0xabcdef1234560000000000000000000000000000000000000000000000000000"
        );

        let (status, body) =
            send(&app, Method::POST, "/datatype2/fixed", Some(json!({"data": "0x1234"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            "0x0000000000000000000000000000000000000000000000000000000000001234"
        );
    }

    #[tokio::test]
    async fn dynamic_data_text_is_utf8() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/datatype2/dynamic",
            Some(json!({"data": "Dynamic"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "0x44796e616d6963");
    }

    #[tokio::test]
    async fn details_reflect_writes() {
        let app = app();
        send(&app, Method::POST, "/datatype2/number", Some(json!({"number": 10}))).await;
        send(&app, Method::POST, "/datatype2/name", Some(json!({"name": "Alice"}))).await;

        let (status, body) = send(&app, Method::GET, "/datatype2/details", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Hello, Solidity!");
        assert_eq!(body["numbers"], json!(["10"]));
        assert_eq!(body["names"], json!(["Alice"]));
        assert_eq!(body["dynamicData"], "0x");

        let (status, patched) = send(
            &app,
            Method::PATCH,
            "/datatype2/details",
            Some(json!({"state": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(patched, body);

        let (status, bare) = send(&app, Method::PATCH, "/datatype2/details", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(bare, body);
    }

    #[tokio::test]
    async fn details_patch_rejects_mistyped_state() {
        let (status, body) = send(
            &app(),
            Method::PATCH,
            "/datatype2/details",
            Some(json!({"state": "abc"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Bad Request");
    }

    #[tokio::test]
    async fn details_patch_accepts_empty_json_body() {
        let request = Request::builder()
            .method(Method::PATCH)
            .uri("/datatype2/details")
            .header("content-type", "application/json")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let (status, body) = send(&app(), Method::GET, "/datatype2/unknown", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({"statusCode": 404, "message": "Not Found", "error": "Not Found"})
        );
    }
}
