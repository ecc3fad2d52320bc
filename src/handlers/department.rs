//! Department handlers
//!
//! Implements department CRUD operations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use axum_extra::extract::WithRejection;

use super::{IdPath, JsonBody};
use crate::entity::department;
use crate::error::AppResult;
use crate::routes::MessageResponse;
use crate::state::AppState;

/// GET /departments
pub async fn get_departments(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<department::Model>>> {
    Ok(Json(state.departments().list().await?))
}

/// GET /departments/:id
pub async fn get_department_by_id(
    State(state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
) -> AppResult<Json<department::Model>> {
    Ok(Json(state.departments().get(id).await?))
}

/// POST /departments
pub async fn create_department(
    State(state): State<AppState>,
    WithRejection(Json(req), _): JsonBody<department::Payload>,
) -> AppResult<(StatusCode, Json<department::Model>)> {
    let input = req.validate()?;
    let dept = state.departments().create(input).await?;
    Ok((StatusCode::CREATED, Json(dept)))
}

/// PUT /departments/:id
pub async fn update_department(
    State(state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
    WithRejection(Json(req), _): JsonBody<department::Payload>,
) -> AppResult<Json<department::Model>> {
    let input = req.validate()?;
    Ok(Json(state.departments().update(id, input).await?))
}

/// DELETE /departments/:id
pub async fn delete_department(
    State(state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
) -> AppResult<Json<MessageResponse>> {
    state.departments().delete(id).await?;
    Ok(Json(MessageResponse::new("Department deleted successfully")))
}
