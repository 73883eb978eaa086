use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use lostfound_auth::domain::repository::{OtpCache, OtpMailer, SecretHasher, UserRepository};
use lostfound_auth::domain::types::{OtpKey, OtpPurpose, ProfileUpdate, User};
use lostfound_auth::error::AuthServiceError;
use lostfound_auth::usecase::session::SessionIssuer;
use lostfound_testing::auth::TEST_JWT_SECRET;

// ── MockUserRepo ─────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, email: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }

    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthServiceError> {
        Ok(self.get(email))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn create(&self, user: &User) -> Result<(), AuthServiceError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(AuthServiceError::EmailAlreadyRegistered);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn update_password(
        &self,
        id: Uuid,
        password_hash: &str,
    ) -> Result<bool, AuthServiceError> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.password_hash = password_hash.to_owned();
                user.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update_profile(
        &self,
        id: Uuid,
        update: &ProfileUpdate,
    ) -> Result<Option<User>, AuthServiceError> {
        let mut users = self.users.lock().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        if let Some(v) = &update.full_name {
            user.full_name = v.clone();
        }
        if let Some(v) = &update.contact_number {
            user.contact_number = v.clone();
        }
        if let Some(v) = &update.designation {
            user.designation = v.clone();
        }
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }
}

// ── MockOtpCache ─────────────────────────────────────────────────────────────

/// In-memory cache keyed by the rendered `OtpKey`. Records the TTL of each put.
#[derive(Clone, Default)]
pub struct MockOtpCache {
    pub entries: Arc<Mutex<HashMap<String, (Vec<u8>, u64)>>>,
    pub attempts: Arc<Mutex<HashMap<String, u64>>>,
}

impl MockOtpCache {
    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }

    pub fn ttl(&self, key: &str) -> Option<u64> {
        self.entries.lock().unwrap().get(key).map(|(_, ttl)| *ttl)
    }

    /// Simulate TTL expiry.
    pub fn expire(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

impl OtpCache for MockOtpCache {
    async fn put(
        &self,
        key: &OtpKey,
        value: &[u8],
        ttl_secs: u64,
    ) -> Result<(), AuthServiceError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_vec(), ttl_secs));
        Ok(())
    }

    async fn get(&self, key: &OtpKey) -> Result<Option<Vec<u8>>, AuthServiceError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .get(&key.to_string())
            .map(|(v, _)| v.clone()))
    }

    async fn delete(&self, key: &OtpKey) -> Result<(), AuthServiceError> {
        self.entries.lock().unwrap().remove(&key.to_string());
        Ok(())
    }

    async fn count_attempt(&self, key: &OtpKey, _ttl_secs: u64) -> Result<u64, AuthServiceError> {
        let mut attempts = self.attempts.lock().unwrap();
        let count = attempts.entry(key.to_string()).or_default();
        *count += 1;
        Ok(*count)
    }

    async fn clear_attempts(&self, key: &OtpKey) -> Result<(), AuthServiceError> {
        self.attempts.lock().unwrap().remove(&key.to_string());
        Ok(())
    }
}

// ── MockMailer ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct SentOtp {
    pub email: String,
    pub code: String,
    pub purpose: OtpPurpose,
}

#[derive(Clone, Default)]
pub struct MockMailer {
    pub sent: Arc<Mutex<Vec<SentOtp>>>,
}

impl MockMailer {
    /// Code from the most recent mail.
    pub fn last_code(&self) -> String {
        self.sent
            .lock()
            .unwrap()
            .last()
            .map(|m| m.code.clone())
            .expect("no otp sent")
    }

    pub fn count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl OtpMailer for MockMailer {
    async fn send_otp(
        &self,
        email: &str,
        code: &str,
        purpose: OtpPurpose,
    ) -> Result<(), AuthServiceError> {
        self.sent.lock().unwrap().push(SentOtp {
            email: email.to_owned(),
            code: code.to_owned(),
            purpose,
        });
        Ok(())
    }
}

// ── PlainHasher ──────────────────────────────────────────────────────────────

/// Reversible stand-in for argon2 so tests stay fast.
#[derive(Clone, Copy, Default)]
pub struct PlainHasher;

impl SecretHasher for PlainHasher {
    fn hash(&self, secret: &str) -> Result<String, AuthServiceError> {
        Ok(format!("plain${secret}"))
    }

    fn verify(&self, secret: &str, hash: &str) -> bool {
        hash.strip_prefix("plain$") == Some(secret)
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub const TEST_PASSWORD: &str = "correct-horse";

pub fn test_user(email: &str) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        email: email.to_owned(),
        password_hash: PlainHasher.hash(TEST_PASSWORD).unwrap(),
        full_name: "Riley Owner".to_owned(),
        contact_number: "5551234567".to_owned(),
        designation: "student".to_owned(),
        created_at: now,
        updated_at: now,
    }
}

pub fn sessions() -> SessionIssuer {
    SessionIssuer {
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        ttl_secs: 3600,
    }
}
