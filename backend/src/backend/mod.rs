//! # Backend Module
//!
//! Contains all non-UI logic for the rental availability service.
//!
//! This module brings together:
//! - **Domain**: calendar grids, availability resolution, range selection and pricing
//! - **Storage**: CSV/YAML files or the marketplace API
//! - **IO**: the REST API consumed by the booking and host web apps
//!
//! ## Architecture
//!
//! ```text
//! Web apps (booking calendar, host availability manager)
//!     ↓
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (business logic, services)
//!     ↓
//! Storage Layer (CSV files or remote API)
//! ```

pub mod config;
pub mod storage;
pub mod domain;
pub mod io;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use shared::WeekStart;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::backend::config::{Config, StorageBackend};
use crate::backend::domain::{AvailabilityService, CalendarService};
use crate::backend::storage::csv::CsvConnection;
use crate::backend::storage::remote::RemoteApiConnection;
use crate::backend::storage::Connection;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub calendar_service: CalendarService,
    pub availability_service: AvailabilityService,
}

impl AppState {
    /// Wire the services over any storage connection
    pub fn with_connection<C: Connection>(connection: &C, week_start: WeekStart) -> Self {
        let calendar_service = CalendarService::with_week_start(week_start);
        let availability_service = AvailabilityService::new(connection, calendar_service);

        Self {
            calendar_service,
            availability_service,
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &Config) -> Result<AppState> {
    info!("Setting up storage");
    let app_state = match &config.storage {
        StorageBackend::Csv { data_dir } => {
            info!("Using CSV storage in {}", data_dir.display());
            let connection = CsvConnection::new(data_dir)?;
            AppState::with_connection(&connection, config.week_start)
        }
        StorageBackend::Remote { base_url } => {
            let connection = RemoteApiConnection::new(base_url)?;
            AppState::with_connection(&connection, config.week_start)
        }
    };

    info!("Calendar weeks start on {}", config.week_start);
    Ok(app_state)
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, cors_origin: &str) -> Result<Router> {
    let origin = cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", cors_origin))?;

    // CORS setup to allow the web apps to make requests
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .nest("/calendar", io::rest::calendar_apis::router())
        .nest(
            "/properties",
            io::rest::availability_apis::router().merge(io::rest::booking_apis::router()),
        );

    Ok(Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::config::DEFAULT_CORS_ORIGIN;
    use crate::backend::storage::csv::test_utils::TestEnvironment;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::net::SocketAddr;
    use tower::ServiceExt;

    fn csv_config(env: &TestEnvironment) -> Config {
        Config {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            storage: StorageBackend::Csv { data_dir: env.base_path.join("data") },
            week_start: WeekStart::Monday,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
        }
    }

    #[tokio::test]
    async fn test_initialize_backend_with_csv_storage() {
        let env = TestEnvironment::new().unwrap();
        let config = csv_config(&env);

        let app_state = initialize_backend(&config).await.unwrap();
        assert_eq!(app_state.calendar_service.week_start(), WeekStart::Monday);
        assert!(env.base_path.join("data").is_dir());
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_configured_origin() {
        let env = TestEnvironment::new().unwrap();
        let app_state = initialize_backend(&csv_config(&env)).await.unwrap();
        let app = create_router(app_state, DEFAULT_CORS_ORIGIN).unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/properties/villa/availability")
                    .method(Method::OPTIONS)
                    .header("origin", DEFAULT_CORS_ORIGIN)
                    .header("access-control-request-method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            DEFAULT_CORS_ORIGIN
        );
    }

    #[tokio::test]
    async fn test_invalid_cors_origin() {
        let env = TestEnvironment::new().unwrap();
        let app_state = initialize_backend(&csv_config(&env)).await.unwrap();

        assert!(create_router(app_state, "bad\norigin").is_err());
    }

    #[tokio::test]
    async fn test_invalid_remote_url_fails_initialization() {
        let config = Config {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            storage: StorageBackend::Remote { base_url: "not a url".to_string() },
            week_start: WeekStart::Sunday,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
        };

        assert!(initialize_backend(&config).await.is_err());
    }
}
