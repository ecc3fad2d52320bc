//! Employee handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use axum_extra::extract::WithRejection;

use super::{IdPath, JsonBody};
use crate::entity::employee;
use crate::error::AppResult;
use crate::routes::MessageResponse;
use crate::state::AppState;

/// GET /employees
pub async fn get_employees(State(state): State<AppState>) -> AppResult<Json<Vec<employee::Model>>> {
    Ok(Json(state.employees().list().await?))
}

/// GET /employees/:id
pub async fn get_employee_by_id(
    State(state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
) -> AppResult<Json<employee::Model>> {
    Ok(Json(state.employees().get(id).await?))
}

/// POST /employees
pub async fn create_employee(
    State(state): State<AppState>,
    WithRejection(Json(req), _): JsonBody<employee::Payload>,
) -> AppResult<(StatusCode, Json<employee::Model>)> {
    let input = req.validate()?;
    let created = state.employees().create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /employees/:id
pub async fn update_employee(
    State(state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
    WithRejection(Json(req), _): JsonBody<employee::Payload>,
) -> AppResult<Json<employee::Model>> {
    let input = req.validate()?;
    Ok(Json(state.employees().update(id, input).await?))
}

/// DELETE /employees/:id
pub async fn delete_employee(
    State(state): State<AppState>,
    WithRejection(Path(id), _): IdPath,
) -> AppResult<Json<MessageResponse>> {
    state.employees().delete(id).await?;
    Ok(Json(MessageResponse::new("Employee deleted successfully")))
}
