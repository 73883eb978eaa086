use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Claims service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ClaimsServiceError {
    #[error("invalid {0}")]
    InvalidField(&'static str),
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("proof image must be an image upload")]
    InvalidProofImage,
    #[error("found item not found")]
    FoundItemNotFound,
    #[error("claim not found")]
    ClaimNotFound,
    #[error("only the item's reporter can do this")]
    NotItemReporter,
    #[error("you cannot claim an item you reported")]
    CannotClaimOwnItem,
    #[error("found item is already resolved")]
    ItemNotPending,
    #[error("claim has already been decided")]
    ClaimAlreadyDecided,
    #[error("you have already claimed this item")]
    DuplicateClaim,
    #[error("similarity service unavailable")]
    ScorerUnavailable,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ClaimsServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidField(_) => "INVALID_FIELD",
            Self::UnknownCategory(_) => "UNKNOWN_CATEGORY",
            Self::InvalidProofImage => "INVALID_PROOF_IMAGE",
            Self::FoundItemNotFound => "FOUND_ITEM_NOT_FOUND",
            Self::ClaimNotFound => "CLAIM_NOT_FOUND",
            Self::NotItemReporter => "NOT_ITEM_REPORTER",
            Self::CannotClaimOwnItem => "CANNOT_CLAIM_OWN_ITEM",
            Self::ItemNotPending => "ITEM_NOT_PENDING",
            Self::ClaimAlreadyDecided => "CLAIM_ALREADY_DECIDED",
            Self::DuplicateClaim => "DUPLICATE_CLAIM",
            Self::ScorerUnavailable => "SCORER_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ClaimsServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidField(_) | Self::UnknownCategory(_) | Self::InvalidProofImage => {
                StatusCode::BAD_REQUEST
            }
            Self::FoundItemNotFound | Self::ClaimNotFound => StatusCode::NOT_FOUND,
            Self::NotItemReporter | Self::CannotClaimOwnItem => StatusCode::FORBIDDEN,
            Self::ItemNotPending | Self::ClaimAlreadyDecided | Self::DuplicateClaim => {
                StatusCode::CONFLICT
            }
            Self::ScorerUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // TraceLayer records every status; only 500s need the error chain.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %format!("{e:#}"), kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
