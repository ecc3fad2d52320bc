//! Leave handlers
//!
//! Leaves are listed (all, or per employee) and created; there is no update or delete.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use axum_extra::extract::WithRejection;

use super::{IdPath, JsonBody};
use crate::entity::leave;
use crate::error::AppResult;
use crate::state::AppState;

/// GET /leaves
pub async fn get_leaves(State(state): State<AppState>) -> AppResult<Json<Vec<leave::Model>>> {
    Ok(Json(state.leaves().list().await?))
}

/// GET /leaves/:empId
pub async fn get_leaves_by_emp_id(
    State(state): State<AppState>,
    WithRejection(Path(emp_id), _): IdPath,
) -> AppResult<Json<Vec<leave::Model>>> {
    Ok(Json(state.leaves().list_by_employee(emp_id).await?))
}

/// POST /leaves
pub async fn create_leave(
    State(state): State<AppState>,
    WithRejection(Json(req), _): JsonBody<leave::Payload>,
) -> AppResult<(StatusCode, Json<leave::Model>)> {
    let input = req.validate()?;
    let created = state.leaves().create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
