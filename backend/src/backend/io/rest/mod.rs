//! # REST API Interface Layer
//!
//! HTTP endpoints for the booking calendar and the host availability manager.
//! Handlers translate JSON to domain calls and domain errors to status codes;
//! no business rules live here.
//!
//! - `/api/calendar/*`: current date
//! - `/api/properties/:property_id/...`: property pricing, calendar months,
//!   availability periods, range selection and quotes

pub mod calendar_apis;
pub mod availability_apis;
pub mod booking_apis;
pub mod mappers;

#[cfg(test)]
mod test_support;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::ErrorResponse;
use tracing::{error, warn};

use crate::backend::domain::AvailabilityError;

/// Map a domain error to its HTTP status and a JSON error body
pub fn availability_error_response(err: AvailabilityError) -> Response {
    let status = match &err {
        AvailabilityError::PropertyNotFound(_) | AvailabilityError::PeriodNotFound(_) => {
            StatusCode::NOT_FOUND
        }
        AvailabilityError::InvalidPeriod(_) | AvailabilityError::InvalidProperty(_) => {
            StatusCode::BAD_REQUEST
        }
        AvailabilityError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        error!("Request failed: {:#}", err);
    } else {
        warn!("Request rejected: {}", err);
    }

    (status, Json(ErrorResponse { error: err.to_string() })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::period::PeriodValidationError;
    use crate::backend::domain::models::property::PropertyValidationError;

    #[test]
    fn test_error_status_codes() {
        let cases = [
            (AvailabilityError::PropertyNotFound("villa".into()), StatusCode::NOT_FOUND),
            (AvailabilityError::PeriodNotFound("p1".into()), StatusCode::NOT_FOUND),
            (
                AvailabilityError::InvalidPeriod(PeriodValidationError::EndBeforeStart),
                StatusCode::BAD_REQUEST,
            ),
            (
                AvailabilityError::InvalidProperty(PropertyValidationError::EmptyTitle),
                StatusCode::BAD_REQUEST,
            ),
            (
                AvailabilityError::Storage(anyhow::anyhow!("disk full")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(availability_error_response(err).status(), expected);
        }
    }
}
