use std::path::PathBuf;

use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use lostfound_auth_types::identity::SessionSecret;

use crate::infra::db::{
    DbClaimRepository, DbFoundItemRepository, DbNotificationRepository, DbResolutionRepository,
};
use crate::infra::dispatcher::ChannelDispatcher;
use crate::infra::image_store::LocalImageStore;
use crate::infra::scorer::HttpSimilarityScorer;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub http_client: reqwest::Client,
    pub scorer_url: String,
    pub upload_dir: PathBuf,
    pub upload_base_url: String,
    pub notifications: ChannelDispatcher,
}

impl AppState {
    pub fn found_item_repo(&self) -> DbFoundItemRepository {
        DbFoundItemRepository {
            db: self.db.clone(),
        }
    }

    pub fn claim_repo(&self) -> DbClaimRepository {
        DbClaimRepository {
            db: self.db.clone(),
        }
    }

    pub fn resolution_repo(&self) -> DbResolutionRepository {
        DbResolutionRepository {
            db: self.db.clone(),
        }
    }

    pub fn notification_repo(&self) -> DbNotificationRepository {
        DbNotificationRepository {
            db: self.db.clone(),
        }
    }

    pub fn notification_dispatcher(&self) -> ChannelDispatcher {
        self.notifications.clone()
    }

    pub fn image_store(&self) -> LocalImageStore {
        LocalImageStore {
            dir: self.upload_dir.clone(),
            base_url: self.upload_base_url.clone(),
        }
    }

    pub fn similarity_scorer(&self) -> HttpSimilarityScorer {
        HttpSimilarityScorer {
            client: self.http_client.clone(),
            base_url: self.scorer_url.clone(),
        }
    }
}

impl FromRef<AppState> for SessionSecret {
    fn from_ref(state: &AppState) -> Self {
        SessionSecret(state.jwt_secret.clone())
    }
}
