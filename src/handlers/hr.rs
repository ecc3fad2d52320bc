//! HR handlers
//!
//! HR bodies are employee bodies; responses add `hr_id` to the employee fields.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use axum_extra::extract::WithRejection;

use super::{IdPath, JsonBody};
use crate::entity::hr::{self, HrRecord};
use crate::error::AppResult;
use crate::routes::MessageResponse;
use crate::state::AppState;

/// GET /hrs
pub async fn get_hrs(State(state): State<AppState>) -> AppResult<Json<Vec<HrRecord>>> {
    Ok(Json(state.hrs().list().await?))
}

/// GET /hrs/:hrId
pub async fn get_hr_by_id(
    State(state): State<AppState>,
    WithRejection(Path(hr_id), _): IdPath,
) -> AppResult<Json<HrRecord>> {
    Ok(Json(state.hrs().get(hr_id).await?))
}

/// POST /hrs
///
/// Validation runs before any transaction is opened.
pub async fn create_hr(
    State(state): State<AppState>,
    WithRejection(Json(req), _): JsonBody<hr::Payload>,
) -> AppResult<(StatusCode, Json<HrRecord>)> {
    let input = req.validate()?;
    let record = state.hrs().create(input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT /hrs/:hrId
pub async fn update_hr(
    State(state): State<AppState>,
    WithRejection(Path(hr_id), _): IdPath,
    WithRejection(Json(req), _): JsonBody<hr::Payload>,
) -> AppResult<Json<HrRecord>> {
    let input = req.validate()?;
    Ok(Json(state.hrs().update(hr_id, input).await?))
}

/// DELETE /hrs/:hrId
pub async fn delete_hr(
    State(state): State<AppState>,
    WithRejection(Path(hr_id), _): IdPath,
) -> AppResult<Json<MessageResponse>> {
    state.hrs().delete(hr_id).await?;
    Ok(Json(MessageResponse::new("HR deleted successfully")))
}
