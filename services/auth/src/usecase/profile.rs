use uuid::Uuid;

use crate::domain::repository::UserRepository;
use crate::domain::types::{AuthenticatedUser, ProfileUpdate, User};
use crate::error::AuthServiceError;
use crate::usecase::session::SessionIssuer;
use crate::usecase::validate;

// ── GetProfile ───────────────────────────────────────────────────────────────

pub struct GetProfileUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> GetProfileUseCase<U> {
    pub async fn execute(&self, user_id: Uuid) -> Result<User, AuthServiceError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthServiceError::UserNotFound)
    }
}

// ── UpdateProfile ────────────────────────────────────────────────────────────

pub struct UpdateProfileUseCase<U: UserRepository> {
    pub users: U,
    pub sessions: SessionIssuer,
}

impl<U: UserRepository> UpdateProfileUseCase<U> {
    /// Persist the present fields and re-issue the session, since its claims embed the profile.
    pub async fn execute(
        &self,
        user_id: Uuid,
        update: ProfileUpdate,
    ) -> Result<AuthenticatedUser, AuthServiceError> {
        if update.is_empty() {
            return Err(AuthServiceError::MissingData);
        }
        let update = ProfileUpdate {
            full_name: update
                .full_name
                .map(|v| validate::text("full_name", &v))
                .transpose()?,
            contact_number: update
                .contact_number
                .map(|v| validate::text("contact_number", &v))
                .transpose()?,
            designation: update
                .designation
                .map(|v| validate::text("designation", &v))
                .transpose()?,
        };

        let user = self
            .users
            .update_profile(user_id, &update)
            .await?
            .ok_or(AuthServiceError::UserNotFound)?;

        let session = self.sessions.issue(&user)?;
        Ok(AuthenticatedUser { user, session })
    }
}
