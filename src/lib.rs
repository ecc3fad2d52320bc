//! HRMS - a small human-resources record service
//!
//! Exposes CRUD over employees, HR staff, departments, national holidays,
//! leave types and leaves as a JSON HTTP API backed by a relational database.

pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use state::AppState;
