use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;

use lostfound_core::health::{healthz, readyz};
use lostfound_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{
    claim::{
        MAX_CLAIM_FORM_BYTES, approve_claim, create_claim, list_claims_for_item, list_my_claims,
        rank_claims, reject_claim,
    },
    found_item::{
        create_found_item, delete_found_item, get_found_item, list_found_items,
        list_my_found_items,
    },
    notification::{list_notifications, mark_all_read, mark_read},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Found items
        .route("/found-items", post(create_found_item).get(list_found_items))
        .route("/found-items/personal", get(list_my_found_items))
        .route(
            "/found-items/{id}",
            get(get_found_item).delete(delete_found_item),
        )
        // Claims
        .route(
            "/claim-items/{found_item_id}",
            post(create_claim).layer(DefaultBodyLimit::max(MAX_CLAIM_FORM_BYTES)),
        )
        .route("/claim-items/personal", get(list_my_claims))
        .route(
            "/claim-items/found/{found_item_id}",
            get(list_claims_for_item),
        )
        .route(
            "/claim-items/found/{found_item_id}/ranking",
            get(rank_claims),
        )
        .route("/claim-items/approve/{claim_id}", patch(approve_claim))
        .route("/claim-items/reject/{claim_id}", patch(reject_claim))
        // Notifications
        .route("/notifications", get(list_notifications))
        .route("/notifications/mark-all-read", patch(mark_all_read))
        .route("/notifications/mark-read/{id}", patch(mark_read));

    // Proof images stored on local disk are served from their public path prefix.
    let upload_prefix = state.upload_base_url.trim_end_matches('/');
    if upload_prefix.starts_with('/') {
        router = router.nest_service(upload_prefix, ServeDir::new(&state.upload_dir));
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(trace_layer())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
