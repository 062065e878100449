use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tracing::info;

use crate::backend::AppState;

/// Create a router for calendar related APIs.
///
/// The month a client is looking at stays on the client; month views carry
/// their previous and next months for navigation.
pub fn router() -> Router<AppState> {
    Router::new().route("/current-date", get(get_current_date))
}

/// Get current date information from the backend
async fn get_current_date(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/calendar/current-date");

    let current_date = state.calendar_service.get_current_date();
    (StatusCode::OK, Json(current_date)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::io::rest::test_support::{parse, send, test_app, NO_BODY};
    use axum::http::Method;
    use shared::CurrentDateResponse;

    #[tokio::test]
    async fn test_get_current_date() {
        let (app, app_state, _env) = test_app().await;

        let (status, body) = send(&app, Method::GET, "/api/calendar/current-date", NO_BODY).await;
        assert_eq!(status, StatusCode::OK);

        let current: CurrentDateResponse = parse(&body);
        let today = app_state.calendar_service.today();
        assert_eq!(current.iso_date, today.format("%Y-%m-%d").to_string());
    }

    #[tokio::test]
    async fn test_calendar_routes_keep_no_month_state() {
        let (app, _state, _env) = test_app().await;

        let (status, _) = send(&app, Method::GET, "/api/calendar/focus-date", NO_BODY).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
