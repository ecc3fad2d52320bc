//! Entity module - SeaORM entity definitions
//!
//! Each module holds the table model, the request payload and its validated form

pub mod department;
pub mod employee;
pub mod hr;
pub mod leave;
pub mod leave_type;
pub mod national_holiday;
