use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use lostfound_auth_types::token::SessionIdentity;

use crate::error::ClaimsServiceError;
use crate::handlers::dto::{FoundItemResponse, actor, collect};
use crate::state::AppState;
use crate::usecase::found_item::{
    CreateFoundItemInput, CreateFoundItemUseCase, DeleteFoundItemUseCase, GetFoundItemUseCase,
    ListFoundItemsUseCase, ListMyFoundItemsUseCase, parse_category,
};

// ── POST /found-items ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateFoundItemRequest {
    pub title: String,
    pub description: String,
    pub category: String,
    pub found_date: String,
    pub found_location: String,
}

pub async fn create_found_item(
    State(state): State<AppState>,
    identity: SessionIdentity,
    Json(body): Json<CreateFoundItemRequest>,
) -> Result<(StatusCode, Json<FoundItemResponse>), ClaimsServiceError> {
    let usecase = CreateFoundItemUseCase {
        items: state.found_item_repo(),
    };
    let item = usecase
        .execute(
            &actor(&identity),
            CreateFoundItemInput {
                title: body.title,
                description: body.description,
                category: body.category,
                found_date: body.found_date,
                found_location: body.found_location,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(item.into())))
}

// ── GET /found-items ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
}

pub async fn list_found_items(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<FoundItemResponse>>, ClaimsServiceError> {
    let category = parse_category(query.category.as_deref())?;
    let usecase = ListFoundItemsUseCase {
        items: state.found_item_repo(),
    };
    Ok(Json(collect(usecase.execute(category).await?)))
}

// ── GET /found-items/personal ────────────────────────────────────────────────

pub async fn list_my_found_items(
    State(state): State<AppState>,
    identity: SessionIdentity,
) -> Result<Json<Vec<FoundItemResponse>>, ClaimsServiceError> {
    let usecase = ListMyFoundItemsUseCase {
        items: state.found_item_repo(),
    };
    Ok(Json(collect(usecase.execute(identity.user_id).await?)))
}

// ── GET /found-items/{id} ────────────────────────────────────────────────────

pub async fn get_found_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FoundItemResponse>, ClaimsServiceError> {
    let usecase = GetFoundItemUseCase {
        items: state.found_item_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── DELETE /found-items/{id} ─────────────────────────────────────────────────

pub async fn delete_found_item(
    State(state): State<AppState>,
    identity: SessionIdentity,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ClaimsServiceError> {
    let usecase = DeleteFoundItemUseCase {
        items: state.found_item_repo(),
    };
    usecase.execute(id, identity.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
