//! Test utilities for driving the HTTP router against a real or mocked store.
#![allow(dead_code)]

use anyhow::Result;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use hrms::db::{ensure_schema, Gateway};
use hrms::{routes::create_router, AppState, Config};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

/// Sets up an in-memory SQLite database with every table created.
///
/// The pool is capped at one connection so all statements see the same
/// in-memory database.
pub async fn setup_test_db() -> Result<Arc<DatabaseConnection>> {
    let db = connect_memory().await?;
    ensure_schema(&db).await?;
    Ok(db)
}

/// Empty in-memory SQLite database, no tables
///
/// A request waits at most one second for the single connection.
pub async fn connect_memory() -> Result<Arc<DatabaseConnection>> {
    let mut opt = ConnectOptions::new("sqlite::memory:".to_string());
    opt.max_connections(1)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(1))
        .sqlx_logging(false);
    Ok(Arc::new(Database::connect(opt).await?))
}

/// Run raw SQL against the test database
pub async fn execute(db: &DatabaseConnection, sql: &str) -> Result<()> {
    db.execute(Statement::from_string(db.get_database_backend(), sql.to_string()))
        .await?;
    Ok(())
}

pub fn app_with(db: Arc<DatabaseConnection>) -> Router {
    create_router(AppState::new(Gateway::shared(db), Config::default()))
}

pub fn disconnected_app() -> Router {
    create_router(AppState::new(Gateway::disconnected(), Config::default()))
}

/// Router over a fresh in-memory database, plus a handle to that database
pub async fn sqlite_app() -> Result<(Router, Arc<DatabaseConnection>)> {
    let db = setup_test_db().await?;
    Ok((app_with(db.clone()), db))
}

/// Send a request with an optional JSON body and decode the JSON response
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = body.map(|v| v.to_string());
    send_raw(app, method, uri, body).await
}

/// Like `send`, but the body is passed through untouched
pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<String>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(text) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(text)
        }
        None => Body::empty(),
    };
    let request = builder.body(body).unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Complete employee request body in department 1, reporting to nobody
pub fn employee_body(name: &str) -> Value {
    json!({
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        "phone": 9876543210i64,
        "address": "12 Park Street",
        "dob": "1990-05-17",
        "dept_id": 1,
        "manager_id": 0
    })
}

/// Create a department through the API and return its id
pub async fn seed_department(app: &Router, name: &str) -> i64 {
    let (status, body) = send(app, Method::POST, "/departments", Some(json!({"Dept_Name": name}))).await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["dept_id"].as_i64().unwrap()
}

/// Create an employee through the API and return its id
pub async fn seed_employee(app: &Router, name: &str, dept_id: i64, manager_id: i64) -> i64 {
    let mut payload = employee_body(name);
    payload["dept_id"] = json!(dept_id);
    payload["manager_id"] = json!(manager_id);
    let (status, body) = send(app, Method::POST, "/employees", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["emp_id"].as_i64().unwrap()
}

/// Create a leave type through the API and return its id
pub async fn seed_leave_type(app: &Router, name: &str) -> i64 {
    let (status, body) = send(app, Method::POST, "/leavetypes", Some(json!({"name": name}))).await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["leave_type_id"].as_i64().unwrap()
}

/// The `error` field of an error response
pub fn error_of(body: &Value) -> &str {
    body["error"].as_str().unwrap_or_default()
}
