#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{OtpKey, OtpPurpose, ProfileUpdate, User};
use crate::error::AuthServiceError;

/// Credential store. Callers pass emails already normalised.
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthServiceError>;

    /// Insert a new account. Fails with `EmailAlreadyRegistered` on a duplicate email.
    async fn create(&self, user: &User) -> Result<(), AuthServiceError>;

    /// Returns `false` if no such user exists.
    async fn update_password(
        &self,
        id: Uuid,
        password_hash: &str,
    ) -> Result<bool, AuthServiceError>;

    /// Apply the present fields and return the updated user, `None` if absent.
    async fn update_profile(
        &self,
        id: Uuid,
        update: &ProfileUpdate,
    ) -> Result<Option<User>, AuthServiceError>;
}

/// Short-lived OTP and reset-token records (Redis, native TTL).
pub trait OtpCache: Send + Sync {
    /// Store `value` under `key`, replacing any previous entry.
    async fn put(&self, key: &OtpKey, value: &[u8], ttl_secs: u64)
    -> Result<(), AuthServiceError>;

    async fn get(&self, key: &OtpKey) -> Result<Option<Vec<u8>>, AuthServiceError>;

    async fn delete(&self, key: &OtpKey) -> Result<(), AuthServiceError>;

    /// Increment the verification-attempt counter for `key` and return the new count.
    /// The counter expires after `ttl_secs`.
    async fn count_attempt(&self, key: &OtpKey, ttl_secs: u64) -> Result<u64, AuthServiceError>;

    async fn clear_attempts(&self, key: &OtpKey) -> Result<(), AuthServiceError>;
}

/// Out-of-band OTP delivery.
pub trait OtpMailer: Send + Sync {
    async fn send_otp(
        &self,
        email: &str,
        code: &str,
        purpose: OtpPurpose,
    ) -> Result<(), AuthServiceError>;
}

/// One-way hashing for passwords, OTPs and reset tokens.
pub trait SecretHasher: Send + Sync {
    fn hash(&self, secret: &str) -> Result<String, AuthServiceError>;

    /// `false` on mismatch or an unparsable hash.
    fn verify(&self, secret: &str, hash: &str) -> bool;
}
