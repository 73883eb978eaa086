use crate::domain::repository::{OtpCache, OtpMailer, SecretHasher, UserRepository};
use crate::domain::types::{AuthenticatedUser, OtpKey, OtpPurpose};
use crate::error::AuthServiceError;
use crate::usecase::otp;
use crate::usecase::session::SessionIssuer;
use crate::usecase::validate;

// ── Login (password) ─────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct LoginUseCase<U: UserRepository, H: SecretHasher> {
    pub users: U,
    pub hasher: H,
    pub sessions: SessionIssuer,
}

impl<U: UserRepository, H: SecretHasher> LoginUseCase<U, H> {
    /// Unknown email and wrong password fail identically.
    pub async fn execute(&self, input: LoginInput) -> Result<AuthenticatedUser, AuthServiceError> {
        let email =
            validate::email(&input.email).map_err(|_| AuthServiceError::InvalidCredentials)?;

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AuthServiceError::InvalidCredentials)?;
        if !self.hasher.verify(&input.password, &user.password_hash) {
            return Err(AuthServiceError::InvalidCredentials);
        }

        let session = self.sessions.issue(&user)?;
        Ok(AuthenticatedUser { user, session })
    }
}

// ── RequestLoginOtp ──────────────────────────────────────────────────────────

pub struct RequestLoginOtpUseCase<U, C, M, H>
where
    U: UserRepository,
    C: OtpCache,
    M: OtpMailer,
    H: SecretHasher,
{
    pub users: U,
    pub cache: C,
    pub mailer: M,
    pub hasher: H,
}

impl<U, C, M, H> RequestLoginOtpUseCase<U, C, M, H>
where
    U: UserRepository,
    C: OtpCache,
    M: OtpMailer,
    H: SecretHasher,
{
    pub async fn execute(&self, email: &str) -> Result<(), AuthServiceError> {
        let email = validate::email(email)?;
        self.users
            .find_by_email(&email)
            .await?
            .ok_or(AuthServiceError::UserNotFound)?;

        otp::issue(&self.cache, &self.mailer, &self.hasher, &email, OtpPurpose::Login).await
    }
}

// ── ConfirmLoginOtp ──────────────────────────────────────────────────────────

pub struct ConfirmLoginOtpInput {
    pub email: String,
    pub otp: String,
}

pub struct ConfirmLoginOtpUseCase<U, C, H>
where
    U: UserRepository,
    C: OtpCache,
    H: SecretHasher,
{
    pub users: U,
    pub cache: C,
    pub hasher: H,
    pub sessions: SessionIssuer,
}

impl<U, C, H> ConfirmLoginOtpUseCase<U, C, H>
where
    U: UserRepository,
    C: OtpCache,
    H: SecretHasher,
{
    pub async fn execute(
        &self,
        input: ConfirmLoginOtpInput,
    ) -> Result<AuthenticatedUser, AuthServiceError> {
        let email = validate::email(&input.email)?;
        let key = OtpKey::Login(email.clone());
        otp::verify(&self.cache, &self.hasher, &key, &input.otp).await?;

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AuthServiceError::UserNotFound)?;
        self.cache.delete(&key).await?;

        let session = self.sessions.issue(&user)?;
        Ok(AuthenticatedUser { user, session })
    }
}
