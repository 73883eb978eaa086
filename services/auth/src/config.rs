use serde::Deserialize;

use lostfound_core::config::Config;

/// Auth service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct AuthConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Redis connection URL (OTP cache).
    pub redis_url: String,
    /// HMAC secret for signing session tokens. Shared with every service that validates them.
    pub jwt_secret: String,
    /// TCP port to listen on. Env var: `AUTH_PORT`.
    #[serde(default = "default_auth_port")]
    pub auth_port: u16,
    /// Session token lifetime. Env var: `SESSION_TOKEN_TTL_SECS`.
    #[serde(default = "default_session_token_ttl_secs")]
    pub session_token_ttl_secs: u64,
}

impl Config for AuthConfig {}

fn default_auth_port() -> u16 {
    3112
}

fn default_session_token_ttl_secs() -> u64 {
    24 * 60 * 60
}
