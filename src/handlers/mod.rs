//! Request handlers module
//!
//! Handlers decode the request, run the validation pass, call the entity
//! repository and encode the outcome. Errors render through `AppError`.

use axum::{extract::Path, Json};
use axum_extra::extract::WithRejection;

use crate::error::AppError;

pub mod department;
pub mod employee;
pub mod hr;
pub mod leave;
pub mod leave_type;
pub mod national_holiday;

/// JSON body whose decode failures surface as validation errors
pub type JsonBody<T> = WithRejection<Json<T>, AppError>;

/// Integer path id whose parse failures surface as validation errors
pub type IdPath = WithRejection<Path<i32>, AppError>;
