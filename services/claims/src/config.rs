use serde::Deserialize;

use lostfound_core::config::Config;

/// Claims service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct ClaimsConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret the auth service signs session tokens with.
    pub jwt_secret: String,
    /// TCP port to listen on. Env var: `CLAIMS_PORT`.
    #[serde(default = "default_claims_port")]
    pub claims_port: u16,
    /// Directory proof images are written to.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    /// Public prefix of stored proof images. A path prefix is served by this service.
    #[serde(default = "default_upload_base_url")]
    pub upload_base_url: String,
    /// Base URL of the similarity inference service.
    pub scorer_url: String,
    #[serde(default = "default_notification_queue_capacity")]
    pub notification_queue_capacity: usize,
}

impl Config for ClaimsConfig {}

fn default_claims_port() -> u16 {
    3113
}

fn default_upload_dir() -> String {
    "uploads".to_owned()
}

fn default_upload_base_url() -> String {
    "/uploads".to_owned()
}

fn default_notification_queue_capacity() -> usize {
    1024
}
