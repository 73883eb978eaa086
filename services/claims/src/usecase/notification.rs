use uuid::Uuid;

use crate::domain::repository::NotificationRepository;
use crate::domain::types::Notification;
use crate::error::ClaimsServiceError;

// ── ListNotifications ────────────────────────────────────────────────────────

pub struct ListNotificationsUseCase<N: NotificationRepository> {
    pub notifications: N,
}

impl<N: NotificationRepository> ListNotificationsUseCase<N> {
    pub async fn execute(&self, recipient_id: Uuid) -> Result<Vec<Notification>, ClaimsServiceError> {
        self.notifications.list_for(recipient_id).await
    }
}

// ── MarkNotificationRead ─────────────────────────────────────────────────────

pub struct MarkNotificationReadUseCase<N: NotificationRepository> {
    pub notifications: N,
}

impl<N: NotificationRepository> MarkNotificationReadUseCase<N> {
    /// Someone else's notification counts as nothing to update.
    pub async fn execute(&self, id: Uuid, recipient_id: Uuid) -> Result<u64, ClaimsServiceError> {
        self.notifications.mark_read(id, recipient_id).await
    }
}

// ── MarkAllNotificationsRead ─────────────────────────────────────────────────

pub struct MarkAllNotificationsReadUseCase<N: NotificationRepository> {
    pub notifications: N,
}

impl<N: NotificationRepository> MarkAllNotificationsReadUseCase<N> {
    pub async fn execute(&self, recipient_id: Uuid) -> Result<u64, ClaimsServiceError> {
        self.notifications.mark_all_read(recipient_id).await
    }
}
