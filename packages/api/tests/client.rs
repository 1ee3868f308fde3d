//! Drives ApiClient against a throw-away axum backend on 127.0.0.1.

use std::collections::HashMap;

use api::{ApiClient, ApiError, AppointmentQuery};
use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use store::{AppointmentStatus, NewCustomer, Role};

async fn spawn(api: Router) -> String {
    let app = Router::new().nest("/api", api);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api")
}

fn appointment(id: i64, status: &str, reason: &str) -> Value {
    json!({
        "id": id,
        "customer_id": 10,
        "doctor_id": 3,
        "scheduled_at": "2026-06-01T09:00:00",
        "status": status,
        "reason": reason,
    })
}

async fn me(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if auth != "Bearer secret-token" {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Token missing or expired" })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "id": 5,
            "name": "Nia Brooks",
            "email": "nia@clinic.test",
            "role": "doctor"
        })),
    )
}

async fn login(Json(body): Json<Value>) -> Json<Value> {
    Json(json!({
        "token": "secret-token",
        "user": {
            "id": 5,
            "name": "Nia Brooks",
            "email": body["email"],
            "role": "doctor"
        }
    }))
}

async fn list_appointments(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let mut keys: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
    keys.sort();
    Json(json!([appointment(1, "scheduled", &keys.join("&"))]))
}

async fn update_appointment(Path(id): Path<i64>, Json(body): Json<Value>) -> Json<Value> {
    let status = body["status"].as_str().unwrap_or("scheduled").to_string();
    Json(appointment(id, &status, "updated"))
}

async fn delete_appointment(Path(_id): Path<i64>) -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn create_customer() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "errors": { "phone": ["already registered"] } })),
    )
}

async fn clinics() -> (StatusCode, &'static str) {
    (StatusCode::BAD_GATEWAY, "<html><h1>502</h1></html>")
}

fn backend() -> Router {
    Router::new()
        .route("/users/me", get(me))
        .route("/auth/login", post(login))
        .route("/appointments", get(list_appointments))
        .route(
            "/appointments/{id}",
            axum::routing::put(update_appointment).delete(delete_appointment),
        )
        .route("/customers", post(create_customer))
        .route("/clinics", get(clinics))
}

#[tokio::test]
async fn test_login_then_bearer_is_sent() {
    let base = spawn(backend()).await;
    let anonymous = ApiClient::new(&base);

    let err = anonymous.current_user().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "Token missing or expired");

    let session = anonymous.login("  Nia@Clinic.TEST ", "pw").await.unwrap();
    assert_eq!(session.user.email, "nia@clinic.test");
    assert_eq!(session.user.role, Role::Doctor);

    let authed = anonymous.with_token(Some(session.token));
    let user = authed.current_user().await.unwrap();
    assert_eq!(user.display_name(), "Nia Brooks");
}

#[tokio::test]
async fn test_query_parameters_are_forwarded() {
    let base = spawn(backend()).await;
    let client = ApiClient::new(&base);

    let all = client
        .list_appointments(&AppointmentQuery::default())
        .await
        .unwrap();
    assert_eq!(all[0].reason.as_deref(), Some(""));

    let query = AppointmentQuery {
        doctor_id: Some(3),
        status: Some(AppointmentStatus::Confirmed),
        ..Default::default()
    };
    let filtered = client.list_appointments(&query).await.unwrap();
    assert_eq!(filtered[0].reason.as_deref(), Some("doctor_id=3&status=confirmed"));
}

#[tokio::test]
async fn test_cancel_and_delete() {
    let base = spawn(backend()).await;
    let client = ApiClient::new(&base).with_token(Some("secret-token".into()));

    let cancelled = client.cancel_appointment(9).await.unwrap();
    assert_eq!(cancelled.id, 9);
    assert_eq!(cancelled.status, AppointmentStatus::Cancelled);

    client.delete_appointment(9).await.unwrap();
}

#[tokio::test]
async fn test_error_bodies_are_normalized() {
    let base = spawn(backend()).await;
    let client = ApiClient::new(&base);

    let new = NewCustomer {
        name: "Omar Haddad".to_string(),
        phone: "555-0100".to_string(),
        ..Default::default()
    };
    let err = client.create_customer(&new).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 422,
            message: "already registered".to_string()
        }
    );
    assert_eq!(
        err.user_message("save customer"),
        "Failed to save customer: already registered"
    );

    let err = client.list_clinics().await.unwrap_err();
    assert_eq!(err.status(), Some(502));
    assert_eq!(err.to_string(), "Bad Gateway");

    let err = client.list_doctors(None).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_unreachable_backend_is_a_network_error() {
    let client = ApiClient::new("http://127.0.0.1:1/api");
    let err = client.list_clinics().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(err.user_message("load clinics"), "Failed to load clinics");
}
