//! Leave type handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use axum_extra::extract::WithRejection;

use super::{IdPath, JsonBody};
use crate::entity::leave_type;
use crate::error::AppResult;
use crate::routes::MessageResponse;
use crate::state::AppState;

/// GET /leavetypes
pub async fn get_leave_types(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<leave_type::Model>>> {
    Ok(Json(state.leave_types().list().await?))
}

/// GET /leavetypes/:id
pub async fn get_leave_type_by_id(
    State(state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
) -> AppResult<Json<leave_type::Model>> {
    Ok(Json(state.leave_types().get(id).await?))
}

/// POST /leavetypes
pub async fn create_leave_type(
    State(state): State<AppState>,
    WithRejection(Json(req), _): JsonBody<leave_type::Payload>,
) -> AppResult<(StatusCode, Json<leave_type::Model>)> {
    let input = req.validate()?;
    let leave_type = state.leave_types().create(input).await?;
    Ok((StatusCode::CREATED, Json(leave_type)))
}

/// PUT /leavetypes/:id
pub async fn update_leave_type(
    State(state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
    WithRejection(Json(req), _): JsonBody<leave_type::Payload>,
) -> AppResult<Json<leave_type::Model>> {
    let input = req.validate()?;
    Ok(Json(state.leave_types().update(id, input).await?))
}

/// DELETE /leavetypes/:id
pub async fn delete_leave_type(
    State(state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
) -> AppResult<Json<MessageResponse>> {
    state.leave_types().delete(id).await?;
    Ok(Json(MessageResponse::new("Leave type deleted successfully")))
}
