//! National holiday handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use axum_extra::extract::WithRejection;

use super::{IdPath, JsonBody};
use crate::entity::national_holiday;
use crate::error::AppResult;
use crate::routes::MessageResponse;
use crate::state::AppState;

/// GET /nationalholidays
pub async fn get_national_holidays(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<national_holiday::Model>>> {
    Ok(Json(state.holidays().list().await?))
}

/// GET /nationalholidays/:id
pub async fn get_national_holiday_by_id(
    State(state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
) -> AppResult<Json<national_holiday::Model>> {
    Ok(Json(state.holidays().get(id).await?))
}

/// POST /nationalholidays
pub async fn create_national_holiday(
    State(state): State<AppState>,
    WithRejection(Json(req), _): JsonBody<national_holiday::Payload>,
) -> AppResult<(StatusCode, Json<national_holiday::Model>)> {
    let input = req.validate()?;
    let holiday = state.holidays().create(input).await?;
    Ok((StatusCode::CREATED, Json(holiday)))
}

/// PUT /nationalholidays/:id
pub async fn update_national_holiday(
    State(state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
    WithRejection(Json(req), _): JsonBody<national_holiday::Payload>,
) -> AppResult<Json<national_holiday::Model>> {
    let input = req.validate()?;
    Ok(Json(state.holidays().update(id, input).await?))
}

/// DELETE /nationalholidays/:id
pub async fn delete_national_holiday(
    State(state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
) -> AppResult<Json<MessageResponse>> {
    state.holidays().delete(id).await?;
    Ok(Json(MessageResponse::new("National holiday deleted successfully")))
}
