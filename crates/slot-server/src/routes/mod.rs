pub mod booking;
pub mod health;
pub mod slots;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use slot_engine::SlotError;

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Query string carrying a meeting length in minutes
#[derive(Deserialize)]
pub struct DurationQuery {
    pub duration: i32,
}

/// Convert scheduling errors to HTTP responses.
///
/// Every `SlotError` is caused by client input, so all map to 400.
#[derive(Debug)]
pub struct AppError(SlotError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

impl From<SlotError> for AppError {
    fn from(err: SlotError) -> Self {
        Self(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_slot_error_is_a_bad_request() {
        let errors = [
            SlotError::Format("'9am': input contains invalid characters".to_string()),
            SlotError::InvalidDuration {
                expected: 60,
                actual: 90,
            },
            SlotError::SlotUnavailable {
                start: "10:00".to_string(),
                end: "11:00".to_string(),
            },
        ];
        for err in errors {
            let response = AppError::from(err).into_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }
}
