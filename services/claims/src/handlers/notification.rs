use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use lostfound_auth_types::token::SessionIdentity;

use crate::error::ClaimsServiceError;
use crate::handlers::dto::{NotificationResponse, UpdatedResponse, collect};
use crate::state::AppState;
use crate::usecase::notification::{
    ListNotificationsUseCase, MarkAllNotificationsReadUseCase, MarkNotificationReadUseCase,
};

// ── GET /notifications ───────────────────────────────────────────────────────

pub async fn list_notifications(
    State(state): State<AppState>,
    identity: SessionIdentity,
) -> Result<Json<Vec<NotificationResponse>>, ClaimsServiceError> {
    let usecase = ListNotificationsUseCase {
        notifications: state.notification_repo(),
    };
    Ok(Json(collect(usecase.execute(identity.user_id).await?)))
}

// ── PATCH /notifications/mark-all-read ───────────────────────────────────────

pub async fn mark_all_read(
    State(state): State<AppState>,
    identity: SessionIdentity,
) -> Result<Json<UpdatedResponse>, ClaimsServiceError> {
    let usecase = MarkAllNotificationsReadUseCase {
        notifications: state.notification_repo(),
    };
    let updated = usecase.execute(identity.user_id).await?;
    Ok(Json(UpdatedResponse { updated }))
}

// ── PATCH /notifications/mark-read/{id} ──────────────────────────────────────

pub async fn mark_read(
    State(state): State<AppState>,
    identity: SessionIdentity,
    Path(id): Path<Uuid>,
) -> Result<Json<UpdatedResponse>, ClaimsServiceError> {
    let usecase = MarkNotificationReadUseCase {
        notifications: state.notification_repo(),
    };
    let updated = usecase.execute(id, identity.user_id).await?;
    Ok(Json(UpdatedResponse { updated }))
}
