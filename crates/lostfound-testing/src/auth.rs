//! Mock session helpers for integration tests.
//!
//! Services validate the bearer session token on every protected request. In
//! tests, `MockAuth` signs a token with the test secret so no auth service is
//! needed.

use http::{HeaderMap, HeaderValue, header::AUTHORIZATION};
use uuid::Uuid;

use lostfound_auth_types::token::{SessionSubject, issue_session_token, issue_session_token_at};

/// Secret shared by test routers and `MockAuth`.
pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-unit-tests-only";

/// Configurable identity baked into test session tokens.
#[derive(Debug, Clone)]
pub struct MockAuth {
    pub user_id: Uuid,
    pub email: String,
    pub full_name: String,
    pub contact_number: String,
    pub designation: String,
}

impl MockAuth {
    pub fn new(user_id: Uuid, full_name: &str) -> Self {
        Self {
            user_id,
            email: format!("{}@example.com", full_name.to_lowercase().replace(' ', ".")),
            full_name: full_name.to_owned(),
            contact_number: "5550000000".to_owned(),
            designation: "student".to_owned(),
        }
    }

    /// A random user called "Test User".
    pub fn random() -> Self {
        Self::new(Uuid::new_v4(), "Test User")
    }

    fn subject(&self) -> SessionSubject<'_> {
        SessionSubject {
            user_id: self.user_id,
            email: &self.email,
            full_name: &self.full_name,
            contact_number: &self.contact_number,
            designation: &self.designation,
        }
    }

    /// A session token signed with [`TEST_JWT_SECRET`], valid for one hour.
    pub fn token(&self) -> String {
        issue_session_token(&self.subject(), TEST_JWT_SECRET, 3600)
            .expect("sign test token")
            .0
    }

    /// A session token that expired long ago.
    pub fn expired_token(&self) -> String {
        issue_session_token_at(&self.subject(), TEST_JWT_SECRET, 1_000_000)
            .expect("sign test token")
            .0
    }

    /// Return headers as a logged-in client would send them.
    pub fn headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.token())).expect("ascii token"),
        );
        map
    }
}
