//! In-process notification fan-out.
//!
//! Use cases hand [`NotificationIntent`]s to a [`ChannelDispatcher`] and return
//! immediately. [`run_notification_worker`] drains the channel and persists
//! each intent; a failed write is logged and dropped, never surfaced to the
//! request that produced it.

use chrono::Utc;
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::repository::{NotificationDispatcher, NotificationRepository};
use crate::domain::types::NotificationIntent;

#[derive(Clone)]
pub struct ChannelDispatcher {
    pub tx: mpsc::Sender<NotificationIntent>,
}

impl NotificationDispatcher for ChannelDispatcher {
    fn dispatch(&self, intent: NotificationIntent) {
        match self.tx.try_send(intent) {
            Ok(()) => {}
            Err(TrySendError::Full(intent)) => warn!(
                recipient_id = %intent.recipient_id,
                kind = intent.kind.as_str(),
                "notification queue full, dropping notification"
            ),
            Err(TrySendError::Closed(intent)) => warn!(
                recipient_id = %intent.recipient_id,
                kind = intent.kind.as_str(),
                "notification worker stopped, dropping notification"
            ),
        }
    }
}

/// Bounded channel between the dispatcher and the worker.
pub fn notification_channel(
    capacity: usize,
) -> (ChannelDispatcher, mpsc::Receiver<NotificationIntent>) {
    let (tx, rx) = mpsc::channel(capacity);
    (ChannelDispatcher { tx }, rx)
}

/// Persist intents until every sender is dropped and the queue is empty.
pub async fn run_notification_worker<R: NotificationRepository>(
    repo: R,
    mut rx: mpsc::Receiver<NotificationIntent>,
) {
    while let Some(intent) = rx.recv().await {
        let recipient_id = intent.recipient_id;
        let kind = intent.kind;
        let notification = intent.into_notification(Uuid::now_v7(), Utc::now());
        match repo.create(&notification).await {
            Ok(()) => debug!(
                notification_id = %notification.id,
                recipient_id = %recipient_id,
                kind = kind.as_str(),
                "notification stored"
            ),
            Err(e) => warn!(
                error = ?e,
                recipient_id = %recipient_id,
                kind = kind.as_str(),
                "failed to store notification"
            ),
        }
    }
    debug!("notification worker drained");
}
