use axum::{routing::get, Router};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::error::AppError;
use crate::handlers::{department, employee, hr, leave, leave_type, national_holiday};
use crate::state::AppState;

pub mod health;

/// Plain acknowledgement body, e.g. for deletes
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Create the main router
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        // Employees
        .route(
            "/employees",
            get(employee::get_employees).post(employee::create_employee),
        )
        .route(
            "/employees/:id",
            get(employee::get_employee_by_id)
                .put(employee::update_employee)
                .delete(employee::delete_employee),
        )
        // HR
        .route("/hrs", get(hr::get_hrs).post(hr::create_hr))
        .route(
            "/hrs/:hrId",
            get(hr::get_hr_by_id).put(hr::update_hr).delete(hr::delete_hr),
        )
        // Departments
        .route(
            "/departments",
            get(department::get_departments).post(department::create_department),
        )
        .route(
            "/departments/:id",
            get(department::get_department_by_id)
                .put(department::update_department)
                .delete(department::delete_department),
        )
        // National holidays
        .route(
            "/nationalholidays",
            get(national_holiday::get_national_holidays)
                .post(national_holiday::create_national_holiday),
        )
        .route(
            "/nationalholidays/:id",
            get(national_holiday::get_national_holiday_by_id)
                .put(national_holiday::update_national_holiday)
                .delete(national_holiday::delete_national_holiday),
        )
        // Leave types
        .route(
            "/leavetypes",
            get(leave_type::get_leave_types).post(leave_type::create_leave_type),
        )
        .route(
            "/leavetypes/:id",
            get(leave_type::get_leave_type_by_id)
                .put(leave_type::update_leave_type)
                .delete(leave_type::delete_leave_type),
        )
        // Leaves
        .route("/leaves", get(leave::get_leaves).post(leave::create_leave))
        .route("/leaves/:empId", get(leave::get_leaves_by_emp_id))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Fallback handler for unknown routes
pub async fn fallback() -> AppError {
    AppError::NotFound("Not Found".to_string())
}
