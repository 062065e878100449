//! Guest-side booking flow: two-click range selection and price quotes.
//!
//! The selection is held by the client. Each click sends the current range
//! back and receives the next one.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::post,
    Router,
};
use tracing::info;

use super::availability_error_response;
use crate::backend::AppState;
use shared::{DateRange, SelectRangeRequest};

/// Create a router for booking APIs, nested under `/properties`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:property_id/booking/select", post(select_range))
        .route("/:property_id/booking/quote", post(quote))
}

async fn select_range(
    State(state): State<AppState>,
    Path(property_id): Path<String>,
    Json(request): Json<SelectRangeRequest>,
) -> impl IntoResponse {
    info!("POST /api/properties/{}/booking/select - request: {:?}", property_id, request);

    let today = state.calendar_service.today();
    match state
        .availability_service
        .select_range(&property_id, request.range, request.clicked, today)
        .await
    {
        Ok(range) => (StatusCode::OK, Json(range)).into_response(),
        Err(e) => availability_error_response(e),
    }
}

async fn quote(
    State(state): State<AppState>,
    Path(property_id): Path<String>,
    Json(range): Json<DateRange>,
) -> impl IntoResponse {
    info!("POST /api/properties/{}/booking/quote - range: {:?}", property_id, range);

    let today = state.calendar_service.today();
    match state.availability_service.quote(&property_id, range, today).await {
        Ok(quote) => (StatusCode::OK, Json(quote)).into_response(),
        Err(e) => availability_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::io::rest::test_support::{parse, send, test_app};
    use axum::http::Method;
    use chrono::Days;
    use shared::{CreateAvailabilityPeriodRequest, PriceQuote};

    #[tokio::test]
    async fn test_two_clicks_select_a_range() {
        let (app, app_state, _env) = test_app().await;
        let today = app_state.calendar_service.today();
        let check_in = today + Days::new(10);
        let check_out = today + Days::new(13);

        // Clicking check-out first still yields an ordered range
        let first = SelectRangeRequest { range: DateRange::empty(), clicked: check_out };
        let (status, body) = send(&app, Method::POST, "/api/properties/villa/booking/select", Some(&first)).await;
        assert_eq!(status, StatusCode::OK);
        let range: DateRange = parse(&body);
        assert_eq!(range, DateRange { start_date: Some(check_out), end_date: None });

        let second = SelectRangeRequest { range, clicked: check_in };
        let (_, body) = send(&app, Method::POST, "/api/properties/villa/booking/select", Some(&second)).await;
        let range: DateRange = parse(&body);
        assert_eq!(range, DateRange::between(check_in, check_out));

        // A third click starts over
        let third = SelectRangeRequest { range, clicked: check_in };
        let (_, body) = send(&app, Method::POST, "/api/properties/villa/booking/select", Some(&third)).await;
        let range: DateRange = parse(&body);
        assert_eq!(range, DateRange { start_date: Some(check_in), end_date: None });
    }

    #[tokio::test]
    async fn test_past_click_is_ignored() {
        let (app, app_state, _env) = test_app().await;
        let yesterday = app_state.calendar_service.today() - Days::new(1);

        let request = SelectRangeRequest { range: DateRange::empty(), clicked: yesterday };
        let (status, body) = send(&app, Method::POST, "/api/properties/villa/booking/select", Some(&request)).await;
        assert_eq!(status, StatusCode::OK);
        let range: DateRange = parse(&body);
        assert_eq!(range, DateRange::empty());
    }

    #[tokio::test]
    async fn test_quote_skips_blocked_nights() {
        let (app, app_state, _env) = test_app().await;
        let today = app_state.calendar_service.today();
        let check_in = today + Days::new(10);

        let block = CreateAvailabilityPeriodRequest {
            start_date: check_in + Days::new(1),
            end_date: check_in + Days::new(1),
            is_available: false,
            special_price: None,
            notes: None,
        };
        let (status, _) = send(&app, Method::POST, "/api/properties/villa/availability", Some(&block)).await;
        assert_eq!(status, StatusCode::CREATED);

        let range = DateRange::between(check_in, check_in + Days::new(3));
        let (status, body) = send(&app, Method::POST, "/api/properties/villa/booking/quote", Some(&range)).await;
        assert_eq!(status, StatusCode::OK);

        let quote: PriceQuote = parse(&body);
        assert_eq!(quote.nights, 2);
        assert_eq!(quote.nightly_subtotal, 90_000.0);
        assert_eq!(quote.total, 97_000.0);
        assert_eq!(quote.formatted_total, "97,000 XAF");
        assert!(quote.can_book);
    }

    #[tokio::test]
    async fn test_quote_for_incomplete_range() {
        let (app, _state, _env) = test_app().await;

        let (status, body) = send(&app, Method::POST, "/api/properties/villa/booking/quote", Some(&DateRange::empty())).await;
        assert_eq!(status, StatusCode::OK);
        let quote: PriceQuote = parse(&body);
        assert_eq!((quote.nights, quote.total, quote.can_book), (0, 0.0, false));

        let (status, _) = send(&app, Method::POST, "/api/properties/missing/booking/quote", Some(&DateRange::empty())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_quote_for_range_spanning_centuries_is_refused() {
        let (app, _state, _env) = test_app().await;

        let range = DateRange::between(chrono::NaiveDate::MIN, chrono::NaiveDate::MAX);
        let (status, body) = send(&app, Method::POST, "/api/properties/villa/booking/quote", Some(&range)).await;
        assert_eq!(status, StatusCode::OK);
        let quote: PriceQuote = parse(&body);
        assert_eq!((quote.nights, quote.total, quote.can_book), (0, 0.0, false));
    }
}
