use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::{OtpCache, OtpMailer, SecretHasher, UserRepository};
use crate::domain::types::{
    AuthenticatedUser, OTP_TTL_SECS, OtpKey, OtpPurpose, PendingRegistration, User,
};
use crate::error::AuthServiceError;
use crate::usecase::otp;
use crate::usecase::session::SessionIssuer;
use crate::usecase::validate;

// ── RequestRegistrationOtp ───────────────────────────────────────────────────

pub struct RequestRegistrationOtpInput {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub contact_number: String,
    pub designation: String,
}

pub struct RequestRegistrationOtpUseCase<U, C, M, H>
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

impl<U, C, M, H> RequestRegistrationOtpUseCase<U, C, M, H>
where
    U: UserRepository,
    C: OtpCache,
    M: OtpMailer,
    H: SecretHasher,
{
    pub async fn execute(
        &self,
        input: RequestRegistrationOtpInput,
    ) -> Result<(), AuthServiceError> {
        let email = validate::email(&input.email)?;
        validate::password(&input.password)?;
        let full_name = validate::text("full_name", &input.full_name)?;
        let contact_number = validate::text("contact_number", &input.contact_number)?;
        let designation = validate::text("designation", &input.designation)?;

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AuthServiceError::EmailAlreadyRegistered);
        }

        let code = otp::generate_otp();
        let pending = PendingRegistration {
            otp_hash: self.hasher.hash(&code)?,
            email: email.clone(),
            password: input.password,
            full_name,
            contact_number,
            designation,
        };
        let key = OtpKey::Registration(email.clone());
        otp::store(&self.cache, &key, &pending, OTP_TTL_SECS).await?;
        self.cache.clear_attempts(&key).await?;

        self.mailer
            .send_otp(&email, &code, OtpPurpose::Registration)
            .await
    }
}

// ── ConfirmRegistration ──────────────────────────────────────────────────────

pub struct ConfirmRegistrationInput {
    pub email: String,
    pub otp: String,
}

pub struct ConfirmRegistrationUseCase<U, C, H>
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

impl<U, C, H> ConfirmRegistrationUseCase<U, C, H>
where
    U: UserRepository,
    C: OtpCache,
    H: SecretHasher,
{
    pub async fn execute(
        &self,
        input: ConfirmRegistrationInput,
    ) -> Result<AuthenticatedUser, AuthServiceError> {
        let email = validate::email(&input.email)?;
        let key = OtpKey::Registration(email);

        let pending: PendingRegistration = otp::load(&self.cache, &key)
            .await?
            .ok_or(AuthServiceError::OtpExpired)?;
        otp::guard_attempts(&self.cache, &key).await?;
        if !self.hasher.verify(input.otp.trim(), &pending.otp_hash) {
            return Err(AuthServiceError::InvalidOtp);
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            email: pending.email,
            password_hash: self.hasher.hash(&pending.password)?,
            full_name: pending.full_name,
            contact_number: pending.contact_number,
            designation: pending.designation,
            created_at: now,
            updated_at: now,
        };
        self.users.create(&user).await?;
        self.cache.delete(&key).await?;

        tracing::info!(user_id = %user.id, "user registered");

        let session = self.sessions.issue(&user)?;
        Ok(AuthenticatedUser { user, session })
    }
}
