//! Busy-slot, suggestion and calendar endpoints

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use slot_engine::{Calendar, UserId, UserSlots};

use crate::routes::{AppError, DurationQuery};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/slots", post(save_slots))
        .route("/suggest", get(suggest_slots))
        .route("/calendar/{user_id}", get(calendar))
}

/// Request body for saving busy slots
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveSlotsRequest {
    pub users: Vec<UserSlots>,
}

#[derive(Serialize)]
pub struct SaveSlotsResponse {
    pub status: &'static str,
}

/// POST /slots - Replace busy slots for every listed user
async fn save_slots(
    State(state): State<AppState>,
    Json(req): Json<SaveSlotsRequest>,
) -> Result<Json<SaveSlotsResponse>, AppError> {
    state.scheduler().lock().await.save_slots(&req.users)?;
    Ok(Json(SaveSlotsResponse { status: "saved" }))
}

/// GET /suggest?duration=N - Up to three common free slots
async fn suggest_slots(
    State(state): State<AppState>,
    Query(query): Query<DurationQuery>,
) -> Json<Vec<[String; 2]>> {
    Json(state.scheduler().lock().await.suggest(query.duration))
}

/// GET /calendar/:user_id - A user's busy slots and all group bookings
async fn calendar(State(state): State<AppState>, Path(user_id): Path<UserId>) -> Json<Calendar> {
    Json(state.scheduler().lock().await.calendar(user_id))
}
