//! Group booking endpoint

use axum::{
    extract::{Query, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::routes::{AppError, DurationQuery};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/book", post(book_slot))
}

/// Request body for booking a slot
#[derive(Debug, Deserialize)]
pub struct BookingRequest {
    pub slot: [String; 2],
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub status: &'static str,
    pub slot: [String; 2],
}

/// POST /book?duration=N - Book a slot for every known user
async fn book_slot(
    State(state): State<AppState>,
    Query(query): Query<DurationQuery>,
    Json(req): Json<BookingRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    let booked = state
        .scheduler()
        .lock()
        .await
        .book_pair(&req.slot, query.duration)?;

    Ok(Json(BookingResponse {
        status: "booked",
        slot: booked.to_pair(),
    }))
}
