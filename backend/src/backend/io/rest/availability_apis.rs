//! Property calendar months and the host availability manager.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, put},
    Router,
};
use tracing::info;

use super::availability_error_response;
use super::mappers::{PeriodMapper, PropertyMapper};
use crate::backend::AppState;
use shared::{
    AvailabilityPeriodListResponse, CreateAvailabilityPeriodRequest, DeleteAvailabilityPeriodResponse,
    UpdateAvailabilityPeriodRequest, UpsertPropertyRequest, YearMonth,
};

/// Create a router for property and availability APIs, nested under `/properties`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:property_id", get(get_property).put(upsert_property))
        .route("/:property_id/calendar", get(get_calendar_month))
        .route(
            "/:property_id/availability",
            get(list_periods).post(create_period),
        )
        .route(
            "/:property_id/availability/:period_id",
            put(update_period).delete(delete_period),
        )
}

async fn get_property(
    State(state): State<AppState>,
    Path(property_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/properties/{}", property_id);

    match state.availability_service.get_property(&property_id).await {
        Ok(property) => (StatusCode::OK, Json(PropertyMapper::to_dto(property))).into_response(),
        Err(e) => availability_error_response(e),
    }
}

/// Create or replace a property's pricing inputs
async fn upsert_property(
    State(state): State<AppState>,
    Path(property_id): Path<String>,
    Json(request): Json<UpsertPropertyRequest>,
) -> impl IntoResponse {
    info!("PUT /api/properties/{} - request: {:?}", property_id, request);

    let command = PropertyMapper::to_upsert_command(property_id, request);
    match state.availability_service.upsert_property(command).await {
        Ok(property) => (StatusCode::OK, Json(PropertyMapper::to_dto(property))).into_response(),
        Err(e) => availability_error_response(e),
    }
}

/// Get the 42-day availability grid of a month
async fn get_calendar_month(
    State(state): State<AppState>,
    Path(property_id): Path<String>,
    Query(query): Query<YearMonth>,
) -> impl IntoResponse {
    info!("GET /api/properties/{}/calendar - query: {:?}", property_id, query);

    let today = state.calendar_service.today();
    match state
        .availability_service
        .get_calendar_month(&property_id, query.year, query.month, today)
        .await
    {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => availability_error_response(e),
    }
}

async fn list_periods(
    State(state): State<AppState>,
    Path(property_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/properties/{}/availability", property_id);

    match state.availability_service.list_periods(&property_id).await {
        Ok(periods) => {
            let response = AvailabilityPeriodListResponse {
                property_id,
                periods: PeriodMapper::to_dto_list(periods),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => availability_error_response(e),
    }
}

async fn create_period(
    State(state): State<AppState>,
    Path(property_id): Path<String>,
    Json(request): Json<CreateAvailabilityPeriodRequest>,
) -> impl IntoResponse {
    info!("POST /api/properties/{}/availability - request: {:?}", property_id, request);

    let command = PeriodMapper::to_create_command(property_id, request);
    let today = state.calendar_service.today();
    match state.availability_service.create_period(command, today).await {
        Ok(period) => (StatusCode::CREATED, Json(PeriodMapper::to_dto(period))).into_response(),
        Err(e) => availability_error_response(e),
    }
}

async fn update_period(
    State(state): State<AppState>,
    Path((property_id, period_id)): Path<(String, String)>,
    Json(request): Json<UpdateAvailabilityPeriodRequest>,
) -> impl IntoResponse {
    info!(
        "PUT /api/properties/{}/availability/{} - request: {:?}",
        property_id, period_id, request
    );

    let command = PeriodMapper::to_update_command(property_id, period_id, request);
    let today = state.calendar_service.today();
    match state.availability_service.update_period(command, today).await {
        Ok(period) => (StatusCode::OK, Json(PeriodMapper::to_dto(period))).into_response(),
        Err(e) => availability_error_response(e),
    }
}

async fn delete_period(
    State(state): State<AppState>,
    Path((property_id, period_id)): Path<(String, String)>,
) -> impl IntoResponse {
    info!("DELETE /api/properties/{}/availability/{}", property_id, period_id);

    match state
        .availability_service
        .delete_period(&property_id, &period_id)
        .await
    {
        Ok(()) => {
            let response = DeleteAvailabilityPeriodResponse {
                success_message: format!("Availability period {} deleted", period_id),
                deleted_id: period_id,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => availability_error_response(e),
    }
}
