use lostfound_auth::domain::types::{AuthenticatedUser, MAX_OTP_ATTEMPTS, OtpPurpose};
use lostfound_auth::error::AuthServiceError;
use lostfound_auth::usecase::login::{
    ConfirmLoginOtpInput, ConfirmLoginOtpUseCase, LoginInput, LoginUseCase,
    RequestLoginOtpUseCase,
};
use lostfound_auth_types::token::validate_session_token;
use lostfound_testing::auth::TEST_JWT_SECRET;

use crate::helpers::{
    MockMailer, MockOtpCache, MockUserRepo, PlainHasher, TEST_PASSWORD, sessions, test_user,
};

const EMAIL: &str = "riley@campus.edu";

async fn login(
    users: &MockUserRepo,
    email: &str,
    password: &str,
) -> Result<AuthenticatedUser, AuthServiceError> {
    LoginUseCase {
        users: users.clone(),
        hasher: PlainHasher,
        sessions: sessions(),
    }
    .execute(LoginInput {
        email: email.to_owned(),
        password: password.to_owned(),
    })
    .await
}

async fn request_otp(
    users: &MockUserRepo,
    cache: &MockOtpCache,
    mailer: &MockMailer,
    email: &str,
) -> Result<(), AuthServiceError> {
    RequestLoginOtpUseCase {
        users: users.clone(),
        cache: cache.clone(),
        mailer: mailer.clone(),
        hasher: PlainHasher,
    }
    .execute(email)
    .await
}

async fn confirm_otp(
    users: &MockUserRepo,
    cache: &MockOtpCache,
    email: &str,
    otp: &str,
) -> Result<AuthenticatedUser, AuthServiceError> {
    ConfirmLoginOtpUseCase {
        users: users.clone(),
        cache: cache.clone(),
        hasher: PlainHasher,
        sessions: sessions(),
    }
    .execute(ConfirmLoginOtpInput {
        email: email.to_owned(),
        otp: otp.to_owned(),
    })
    .await
}

// ── Password login ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_login_with_correct_password() {
    let user = test_user(EMAIL);
    let users = MockUserRepo::new(vec![user.clone()]);

    let output = login(&users, "Riley@Campus.edu", TEST_PASSWORD).await.unwrap();

    assert_eq!(output.user.id, user.id);
    let identity = validate_session_token(&output.session.token, TEST_JWT_SECRET).unwrap();
    assert_eq!(identity.user_id, user.id);
    assert_eq!(identity.expires_at, output.session.expires_at);
}

#[tokio::test]
async fn should_fail_identically_for_wrong_password_and_unknown_email() {
    let users = MockUserRepo::new(vec![test_user(EMAIL)]);

    let wrong_password = login(&users, EMAIL, "not-the-password").await;
    let unknown_email = login(&users, "ghost@campus.edu", TEST_PASSWORD).await;

    let wrong_password = wrong_password.unwrap_err();
    let unknown_email = unknown_email.unwrap_err();
    assert!(matches!(wrong_password, AuthServiceError::InvalidCredentials));
    assert!(matches!(unknown_email, AuthServiceError::InvalidCredentials));
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
}

// ── Login OTP ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_not_send_login_otp_to_unknown_user() {
    let users = MockUserRepo::empty();
    let mailer = MockMailer::default();

    let result = request_otp(&users, &MockOtpCache::default(), &mailer, EMAIL).await;

    assert!(matches!(result, Err(AuthServiceError::UserNotFound)));
    assert_eq!(mailer.count(), 0);
}

#[tokio::test]
async fn should_login_with_emailed_otp_once() {
    let user = test_user(EMAIL);
    let users = MockUserRepo::new(vec![user.clone()]);
    let cache = MockOtpCache::default();
    let mailer = MockMailer::default();

    request_otp(&users, &cache, &mailer, EMAIL).await.unwrap();
    assert_eq!(mailer.sent.lock().unwrap()[0].purpose, OtpPurpose::Login);
    assert_eq!(cache.ttl(&format!("otp:login:{EMAIL}")), Some(300));
    let code = mailer.last_code();

    let output = confirm_otp(&users, &cache, EMAIL, &code).await.unwrap();
    assert_eq!(output.user.id, user.id);

    let replay = confirm_otp(&users, &cache, EMAIL, &code).await;
    assert!(
        matches!(replay, Err(AuthServiceError::OtpExpired)),
        "code must be single-use, got {replay:?}"
    );
}

#[tokio::test]
async fn should_reject_wrong_login_otp() {
    let users = MockUserRepo::new(vec![test_user(EMAIL)]);
    let cache = MockOtpCache::default();
    let mailer = MockMailer::default();
    request_otp(&users, &cache, &mailer, EMAIL).await.unwrap();
    let code = mailer.last_code();
    let wrong = if code == "999999" { "888888" } else { "999999" };

    let result = confirm_otp(&users, &cache, EMAIL, wrong).await;

    assert!(matches!(result, Err(AuthServiceError::InvalidOtp)));
}

#[tokio::test]
async fn should_report_expired_when_login_otp_never_requested() {
    let users = MockUserRepo::new(vec![test_user(EMAIL)]);

    let result = confirm_otp(&users, &MockOtpCache::default(), EMAIL, "123456").await;

    assert!(matches!(result, Err(AuthServiceError::OtpExpired)));
}

#[tokio::test]
async fn should_discard_login_otp_after_too_many_attempts() {
    let users = MockUserRepo::new(vec![test_user(EMAIL)]);
    let cache = MockOtpCache::default();
    let mailer = MockMailer::default();
    request_otp(&users, &cache, &mailer, EMAIL).await.unwrap();
    let code = mailer.last_code();
    let wrong = if code == "999999" { "888888" } else { "999999" };

    for _ in 0..MAX_OTP_ATTEMPTS {
        let result = confirm_otp(&users, &cache, EMAIL, wrong).await;
        assert!(matches!(result, Err(AuthServiceError::InvalidOtp)));
    }
    let result = confirm_otp(&users, &cache, EMAIL, &code).await;
    assert!(matches!(result, Err(AuthServiceError::OtpAttemptsExceeded)));
    assert!(!cache.contains(&format!("otp:login:{EMAIL}")));

    let result = confirm_otp(&users, &cache, EMAIL, &code).await;
    assert!(matches!(result, Err(AuthServiceError::OtpExpired)));
}

#[tokio::test]
async fn should_reset_attempts_when_new_login_otp_is_issued() {
    let users = MockUserRepo::new(vec![test_user(EMAIL)]);
    let cache = MockOtpCache::default();
    let mailer = MockMailer::default();
    request_otp(&users, &cache, &mailer, EMAIL).await.unwrap();
    for _ in 0..MAX_OTP_ATTEMPTS - 1 {
        let _ = confirm_otp(&users, &cache, EMAIL, "not-a-code").await;
    }

    request_otp(&users, &cache, &mailer, EMAIL).await.unwrap();
    let code = mailer.last_code();
    let wrong = if code == "999999" { "888888" } else { "999999" };
    let result = confirm_otp(&users, &cache, EMAIL, wrong).await;
    assert!(matches!(result, Err(AuthServiceError::InvalidOtp)));

    confirm_otp(&users, &cache, EMAIL, &code).await.unwrap();
}
