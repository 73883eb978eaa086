use axum::extract::FromRef;
use deadpool_redis::Pool as RedisPool;
use sea_orm::DatabaseConnection;

use lostfound_auth_types::identity::SessionSecret;

use crate::infra::cache::RedisOtpCache;
use crate::infra::crypto::Argon2Hasher;
use crate::infra::db::{DbUserRepository, OutboxOtpMailer};
use crate::usecase::session::SessionIssuer;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub redis: RedisPool,
    pub jwt_secret: String,
    pub session_ttl_secs: u64,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn otp_cache(&self) -> RedisOtpCache {
        RedisOtpCache {
            pool: self.redis.clone(),
        }
    }

    pub fn otp_mailer(&self) -> OutboxOtpMailer {
        OutboxOtpMailer {
            db: self.db.clone(),
        }
    }

    pub fn hasher(&self) -> Argon2Hasher {
        Argon2Hasher
    }

    pub fn session_issuer(&self) -> SessionIssuer {
        SessionIssuer {
            jwt_secret: self.jwt_secret.clone(),
            ttl_secs: self.session_ttl_secs,
        }
    }
}

impl FromRef<AppState> for SessionSecret {
    fn from_ref(state: &AppState) -> Self {
        SessionSecret(state.jwt_secret.clone())
    }
}
