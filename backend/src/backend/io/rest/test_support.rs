//! Router fixtures for the REST handler tests.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::WeekStart;
use tower::ServiceExt;

use crate::backend::config::DEFAULT_CORS_ORIGIN;
use crate::backend::storage::csv::test_utils::TestEnvironment;
use crate::backend::{create_router, AppState};

/// Router over a temporary data directory holding property "villa"
/// (45,000 per night, 5,000 cleaning, 2,000 service, XAF)
pub async fn test_app() -> (Router, AppState, TestEnvironment) {
    let env = TestEnvironment::with_property("villa", 45_000.0).await.unwrap();
    let app_state = AppState::with_connection(&env.connection, WeekStart::Sunday);
    let app = create_router(app_state.clone(), DEFAULT_CORS_ORIGIN).unwrap();
    (app, app_state, env)
}

/// Send one request and return the status with the raw body
pub async fn send<B: Serialize>(app: &Router, method: Method, uri: &str, body: Option<&B>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().uri(uri).method(method);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

pub fn parse<T: DeserializeOwned>(body: &[u8]) -> T {
    serde_json::from_slice(body).unwrap()
}

/// Shorthand for requests without a body
pub const NO_BODY: Option<&()> = None;
