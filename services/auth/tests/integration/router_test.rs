use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};

use lostfound_auth::router::build_router;
use lostfound_auth::state::AppState;
use lostfound_testing::auth::{MockAuth, TEST_JWT_SECRET};

/// Router over a disconnected database and a never-dialled Redis pool. Only
/// requests rejected before touching storage can succeed here.
fn server() -> TestServer {
    let redis = deadpool_redis::Config::from_url("redis://127.0.0.1:1")
        .create_pool(Some(deadpool_redis::Runtime::Tokio1))
        .unwrap();
    let state = AppState {
        db: DatabaseConnection::Disconnected,
        redis,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        session_ttl_secs: 3600,
    };
    TestServer::new(build_router(state)).unwrap()
}

#[tokio::test]
async fn should_answer_health_checks() {
    let server = server();
    assert_eq!(server.get("/healthz").await.status_code(), StatusCode::OK);
    assert_eq!(server.get("/readyz").await.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn should_attach_request_id() {
    let response = server().get("/healthz").await;
    let id = response.header("x-request-id");
    assert!(id.to_str().unwrap().parse::<uuid::Uuid>().is_ok());
}

#[tokio::test]
async fn should_require_bearer_token_for_profile() {
    let response = server().get("/users/me").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["kind"], "UNAUTHORIZED");
}

#[tokio::test]
async fn should_flag_expired_session() {
    let auth = MockAuth::random();

    let response = server()
        .get("/users/me")
        .authorization_bearer(auth.expired_token())
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["kind"], "TOKEN_EXPIRED");
}

#[tokio::test]
async fn should_reject_empty_profile_update_before_storage() {
    let auth = MockAuth::random();

    let response = server()
        .put("/users/profile")
        .authorization_bearer(auth.token())
        .json(&json!({}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "MISSING_DATA");
}

#[tokio::test]
async fn should_validate_registration_payload_before_storage() {
    let response = server()
        .post("/auth/send-register-otp")
        .json(&json!({
            "email": "not-an-email",
            "password": "long-enough-password",
            "full_name": "Sam Seeker",
            "contact_number": "5559876543",
            "designation": "staff",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["kind"], "INVALID_FIELD");
    assert_eq!(body["message"], "invalid email");
}

#[tokio::test]
async fn should_reject_weak_password_on_registration() {
    let response = server()
        .post("/auth/send-register-otp")
        .json(&json!({
            "email": "sam@campus.edu",
            "password": "short",
            "full_name": "Sam Seeker",
            "contact_number": "5559876543",
            "designation": "staff",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "WEAK_PASSWORD");
}

#[tokio::test]
async fn should_hide_malformed_login_email_behind_invalid_credentials() {
    let response = server()
        .post("/auth/login")
        .json(&json!({ "email": "nope", "password": "whatever1" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["kind"], "INVALID_CREDENTIALS");
}
