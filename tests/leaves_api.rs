//! HTTP tests for /leaves

use axum::http::{Method, StatusCode};
use serde_json::json;

#[path = "test_utils/mod.rs"]
mod test_utils;

use test_utils::{error_of, seed_department, seed_employee, seed_leave_type, send, sqlite_app};

#[tokio::test]
async fn create_and_list_leaves() {
    let (app, _db) = sqlite_app().await.unwrap();
    let dept = seed_department(&app, "Engineering").await;
    let asha = seed_employee(&app, "Asha", dept, 0).await;
    let ravi = seed_employee(&app, "Ravi", dept, asha).await;
    let sick = seed_leave_type(&app, "Sick").await;
    let casual = seed_leave_type(&app, "Casual").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/leaves",
        Some(json!({
            "emp_id": ravi,
            "leave_type_id": sick,
            "start_date": "2025-03-10",
            "end_date": "2025-03-12"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "leave_id": 1,
            "emp_id": ravi,
            "leave_type_id": sick,
            "start_date": "2025-03-10",
            "end_date": "2025-03-12"
        })
    );

    let (status, body) = send(
        &app,
        Method::POST,
        "/leaves",
        Some(json!({"emp_id": asha, "leave_type_id": casual})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["start_date"], json!(null));

    let (status, body) = send(&app, Method::GET, "/leaves", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn leaves_by_employee() {
    let (app, _db) = sqlite_app().await.unwrap();
    let dept = seed_department(&app, "Engineering").await;
    let asha = seed_employee(&app, "Asha", dept, 0).await;
    let ravi = seed_employee(&app, "Ravi", dept, asha).await;
    let sick = seed_leave_type(&app, "Sick").await;

    for emp_id in [ravi, asha, ravi] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/leaves",
            Some(json!({"emp_id": emp_id, "leave_type_id": sick})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, Method::GET, &format!("/leaves/{}", ravi), None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["leave_id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3]);

    // No leaves is an empty list, not a 404
    let (status, body) = send(&app, Method::GET, "/leaves/99", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn leave_requires_employee_and_type() {
    let (app, _db) = sqlite_app().await.unwrap();
    let (status, body) = send(
        &app,
        Method::POST,
        "/leaves",
        Some(json!({"start_date": "2025-03-10"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_of(&body), "Invalid input: EmpID, LeaveTypeID are required fields");
}

#[tokio::test]
async fn leave_for_unknown_employee_or_type_is_storage_error() {
    let (app, _db) = sqlite_app().await.unwrap();
    let dept = seed_department(&app, "Engineering").await;
    let asha = seed_employee(&app, "Asha", dept, 0).await;
    let sick = seed_leave_type(&app, "Sick").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/leaves",
        Some(json!({"emp_id": 777, "leave_type_id": sick})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(error_of(&body).contains("FOREIGN KEY"));

    let (status, _) = send(
        &app,
        Method::POST,
        "/leaves",
        Some(json!({"emp_id": asha, "leave_type_id": 555})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (_, body) = send(&app, Method::GET, "/leaves", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn leave_type_in_use_cannot_be_deleted() {
    let (app, _db) = sqlite_app().await.unwrap();
    let dept = seed_department(&app, "Engineering").await;
    let asha = seed_employee(&app, "Asha", dept, 0).await;
    let sick = seed_leave_type(&app, "Sick").await;
    send(
        &app,
        Method::POST,
        "/leaves",
        Some(json!({"emp_id": asha, "leave_type_id": sick})),
    )
    .await;

    let (status, _) = send(&app, Method::DELETE, &format!("/leavetypes/{}", sick), None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    // Removing the employee takes their leaves with them
    let (status, _) = send(&app, Method::DELETE, &format!("/employees/{}", asha), None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = send(&app, Method::GET, "/leaves", None).await;
    assert_eq!(body, json!([]));

    let (status, _) = send(&app, Method::DELETE, &format!("/leavetypes/{}", sick), None).await;
    assert_eq!(status, StatusCode::OK);
}
