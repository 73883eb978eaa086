use anyhow::Context as _;
use rand::RngExt;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::domain::repository::{OtpCache, OtpMailer, SecretHasher};
use crate::domain::types::{
    MAX_OTP_ATTEMPTS, OTP_LEN, OTP_TTL_SECS, OtpKey, OtpPurpose, PendingOtp, RESET_TOKEN_LEN,
};
use crate::error::AuthServiceError;

const DIGITS: &[u8] = b"0123456789";

const TOKEN_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

fn random_string(charset: &[u8], len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| charset[rng.random_range(0..charset.len())] as char)
        .collect()
}

/// Six random decimal digits.
pub fn generate_otp() -> String {
    random_string(DIGITS, OTP_LEN)
}

pub fn generate_reset_token() -> String {
    random_string(TOKEN_CHARSET, RESET_TOKEN_LEN)
}

pub(crate) async fn store<C: OtpCache, T: Serialize>(
    cache: &C,
    key: &OtpKey,
    record: &T,
    ttl_secs: u64,
) -> Result<(), AuthServiceError> {
    let bytes = serde_json::to_vec(record).context("encode otp record")?;
    cache.put(key, &bytes, ttl_secs).await
}

pub(crate) async fn load<C: OtpCache, T: DeserializeOwned>(
    cache: &C,
    key: &OtpKey,
) -> Result<Option<T>, AuthServiceError> {
    let Some(bytes) = cache.get(key).await? else {
        return Ok(None);
    };
    let record = serde_json::from_slice(&bytes).context("decode otp record")?;
    Ok(Some(record))
}

/// Hash a fresh code into the cache under `purpose`'s key, then mail it.
/// A second request replaces the first code.
pub(crate) async fn issue<C, M, H>(
    cache: &C,
    mailer: &M,
    hasher: &H,
    email: &str,
    purpose: OtpPurpose,
) -> Result<(), AuthServiceError>
where
    C: OtpCache,
    M: OtpMailer,
    H: SecretHasher,
{
    let code = generate_otp();
    let pending = PendingOtp {
        otp_hash: hasher.hash(&code)?,
    };
    let key = OtpKey::for_purpose(purpose, email);
    store(cache, &key, &pending, OTP_TTL_SECS).await?;
    cache.clear_attempts(&key).await?;
    mailer.send_otp(email, &code, purpose).await
}

/// Count one verification attempt against the live code under `key`.
/// Past [`MAX_OTP_ATTEMPTS`] the code is deleted and must be requested again.
pub(crate) async fn guard_attempts<C: OtpCache>(
    cache: &C,
    key: &OtpKey,
) -> Result<(), AuthServiceError> {
    if cache.count_attempt(key, OTP_TTL_SECS).await? > MAX_OTP_ATTEMPTS {
        cache.delete(key).await?;
        warn!(kind = key.kind(), "otp discarded after too many attempts");
        return Err(AuthServiceError::OtpAttemptsExceeded);
    }
    Ok(())
}

/// Check `code` against the cached hash. Absent record means expired or never requested.
pub(crate) async fn verify<C, H>(
    cache: &C,
    hasher: &H,
    key: &OtpKey,
    code: &str,
) -> Result<(), AuthServiceError>
where
    C: OtpCache,
    H: SecretHasher,
{
    let pending: PendingOtp = load(cache, key).await?.ok_or(AuthServiceError::OtpExpired)?;
    guard_attempts(cache, key).await?;
    if !hasher.verify(code.trim(), &pending.otp_hash) {
        return Err(AuthServiceError::InvalidOtp);
    }
    Ok(())
}
