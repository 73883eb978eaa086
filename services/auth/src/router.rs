use axum::{
    Router,
    routing::{get, post, put},
};
use tower::ServiceBuilder;

use lostfound_core::health::{healthz, readyz};
use lostfound_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{
    login::{login, send_login_otp, verify_login_otp},
    password::{send_password_otp, update_password, verify_password_otp},
    profile::{get_me, update_profile},
    register::{send_register_otp, verify_register_otp},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Registration
        .route("/auth/send-register-otp", post(send_register_otp))
        .route("/auth/verify-register-otp", post(verify_register_otp))
        // Login
        .route("/auth/login", post(login))
        .route("/auth/send-login-otp", post(send_login_otp))
        .route("/auth/verify-login-otp", post(verify_login_otp))
        // Password reset
        .route("/auth/send-password-otp", post(send_password_otp))
        .route("/auth/verify-password-otp", post(verify_password_otp))
        .route("/auth/update-password", post(update_password))
        // Profile
        .route("/users/me", get(get_me))
        .route("/users/profile", put(update_profile))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(trace_layer())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
