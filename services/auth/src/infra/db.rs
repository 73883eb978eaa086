use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel as _, QueryFilter, SqlErr, sea_query::Expr,
};
use serde_json::json;
use uuid::Uuid;

use lostfound_auth_schema::{outbox_events, users};

use crate::domain::repository::{OtpMailer, UserRepository};
use crate::domain::types::{OtpPurpose, ProfileUpdate, User};
use crate::error::AuthServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &User) -> Result<(), AuthServiceError> {
        users::ActiveModel {
            id: Set(user.id),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            full_name: Set(user.full_name.clone()),
            contact_number: Set(user.contact_number.clone()),
            designation: Set(user.designation.clone()),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .insert(&self.db)
        .await
        .map_err(|e| map_unique_violation(e, "insert user"))?;
        Ok(())
    }

    async fn update_password(
        &self,
        id: Uuid,
        password_hash: &str,
    ) -> Result<bool, AuthServiceError> {
        let result = users::Entity::update_many()
            .col_expr(users::Column::PasswordHash, Expr::value(password_hash))
            .col_expr(users::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(users::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("update password")?;
        Ok(result.rows_affected > 0)
    }

    async fn update_profile(
        &self,
        id: Uuid,
        update: &ProfileUpdate,
    ) -> Result<Option<User>, AuthServiceError> {
        let Some(row) = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user for profile update")?
        else {
            return Ok(None);
        };

        let mut user = row.into_active_model();
        if let Some(full_name) = &update.full_name {
            user.full_name = Set(full_name.clone());
        }
        if let Some(contact_number) = &update.contact_number {
            user.contact_number = Set(contact_number.clone());
        }
        if let Some(designation) = &update.designation {
            user.designation = Set(designation.clone());
        }
        user.updated_at = Set(Utc::now());

        let model = user.update(&self.db).await.context("update profile")?;
        Ok(Some(user_from_model(model)))
    }
}

fn map_unique_violation(err: DbErr, context: &'static str) -> AuthServiceError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AuthServiceError::EmailAlreadyRegistered,
        _ => AuthServiceError::Internal(anyhow::Error::new(err).context(context)),
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        full_name: model.full_name,
        contact_number: model.contact_number,
        designation: model.designation,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Outbox mailer ────────────────────────────────────────────────────────────

/// Queues OTP mail as an `otp_requested` outbox row for the external mail worker.
#[derive(Clone)]
pub struct OutboxOtpMailer {
    pub db: DatabaseConnection,
}

pub const OTP_REQUESTED_EVENT: &str = "otp_requested";

impl OtpMailer for OutboxOtpMailer {
    async fn send_otp(
        &self,
        email: &str,
        code: &str,
        purpose: OtpPurpose,
    ) -> Result<(), AuthServiceError> {
        let now = Utc::now();
        let id = Uuid::now_v7();
        outbox_events::ActiveModel {
            id: Set(id),
            kind: Set(OTP_REQUESTED_EVENT.to_owned()),
            payload: Set(json!({
                "email": email,
                "code": code,
                "purpose": purpose.as_str(),
            })),
            idempotency_key: Set(format!("{OTP_REQUESTED_EVENT}:{id}")),
            attempts: Set(0),
            last_error: Set(None),
            created_at: Set(now),
            next_attempt_at: Set(now),
            processed_at: Set(None),
        }
        .insert(&self.db)
        .await
        .context("insert otp outbox event")?;
        Ok(())
    }
}
