use crate::domain::repository::{OtpCache, OtpMailer, SecretHasher, UserRepository};
use crate::domain::types::{OtpKey, OtpPurpose, PendingResetToken, RESET_TOKEN_TTL_SECS};
use crate::error::AuthServiceError;
use crate::usecase::otp;
use crate::usecase::validate;

// ── RequestPasswordResetOtp ──────────────────────────────────────────────────

pub struct RequestPasswordResetOtpUseCase<U, C, M, H>
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

impl<U, C, M, H> RequestPasswordResetOtpUseCase<U, C, M, H>
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

        otp::issue(
            &self.cache,
            &self.mailer,
            &self.hasher,
            &email,
            OtpPurpose::PasswordReset,
        )
        .await
    }
}

// ── ConfirmPasswordResetOtp ──────────────────────────────────────────────────

pub struct ConfirmPasswordResetOtpInput {
    pub email: String,
    pub otp: String,
}

#[derive(Debug)]
pub struct ResetTokenOutput {
    pub reset_token: String,
    pub expires_in: u64,
}

pub struct ConfirmPasswordResetOtpUseCase<C: OtpCache, H: SecretHasher> {
    pub cache: C,
    pub hasher: H,
}

impl<C: OtpCache, H: SecretHasher> ConfirmPasswordResetOtpUseCase<C, H> {
    /// Trade a valid OTP for a one-shot reset token.
    pub async fn execute(
        &self,
        input: ConfirmPasswordResetOtpInput,
    ) -> Result<ResetTokenOutput, AuthServiceError> {
        let email = validate::email(&input.email)?;
        let otp_key = OtpKey::PasswordReset(email.clone());
        otp::verify(&self.cache, &self.hasher, &otp_key, &input.otp).await?;

        let reset_token = otp::generate_reset_token();
        let pending = PendingResetToken {
            token_hash: self.hasher.hash(&reset_token)?,
        };
        otp::store(
            &self.cache,
            &OtpKey::ResetToken(email),
            &pending,
            RESET_TOKEN_TTL_SECS,
        )
        .await?;
        self.cache.delete(&otp_key).await?;

        Ok(ResetTokenOutput {
            reset_token,
            expires_in: RESET_TOKEN_TTL_SECS,
        })
    }
}

// ── UpdatePassword ───────────────────────────────────────────────────────────

pub struct UpdatePasswordInput {
    pub email: String,
    pub reset_token: String,
    pub new_password: String,
}

pub struct UpdatePasswordUseCase<U, C, H>
where
    U: UserRepository,
    C: OtpCache,
    H: SecretHasher,
{
    pub users: U,
    pub cache: C,
    pub hasher: H,
}

impl<U, C, H> UpdatePasswordUseCase<U, C, H>
where
    U: UserRepository,
    C: OtpCache,
    H: SecretHasher,
{
    pub async fn execute(&self, input: UpdatePasswordInput) -> Result<(), AuthServiceError> {
        let email =
            validate::email(&input.email).map_err(|_| AuthServiceError::InvalidResetToken)?;
        let key = OtpKey::ResetToken(email.clone());

        let pending: PendingResetToken = otp::load(&self.cache, &key)
            .await?
            .ok_or(AuthServiceError::InvalidResetToken)?;
        if !self.hasher.verify(&input.reset_token, &pending.token_hash) {
            return Err(AuthServiceError::InvalidResetToken);
        }
        validate::password(&input.new_password)?;

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AuthServiceError::UserNotFound)?;
        let password_hash = self.hasher.hash(&input.new_password)?;
        if !self.users.update_password(user.id, &password_hash).await? {
            return Err(AuthServiceError::UserNotFound);
        }
        self.cache.delete(&key).await?;

        tracing::info!(user_id = %user.id, "password updated");
        Ok(())
    }
}
