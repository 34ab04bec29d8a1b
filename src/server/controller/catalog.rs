//! Endpoints for genres, platforms, publishers and developers.
//!
//! The four catalogs share one set of handlers; the first path segment after `/api` selects
//! the catalog.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{CountDto, ErrorDto},
        catalog::{
            CatalogEntryDto, CreateCatalogEntryDto, PaginatedCatalogEntriesDto,
            UpdateCatalogEntryDto,
        },
        game::PaginatedGamesDto,
    },
    server::{
        controller::param::PageParam,
        error::AppError,
        i18n::{MessageKey, Messages},
        middleware::auth::{AuthGuard, Permission},
        model::{
            association::AssociationKind,
            catalog::{CreateCatalogEntryParams, UpdateCatalogEntryParams},
        },
        service::{catalog::CatalogService, game::GameService},
        state::AppState,
    },
};

/// Tag for grouping catalog endpoints in OpenAPI documentation
pub static CATALOG_TAG: &str = "catalog";

/// Resolves a path segment such as `genres` to its catalog.
///
/// # Returns
/// - `Ok(AssociationKind)` - Known catalog
/// - `Err(AppError::NotFound)` - No catalog with that path
pub fn parse_kind(messages: &Messages, segment: &str) -> Result<AssociationKind, AppError> {
    AssociationKind::from_path(segment)
        .ok_or_else(|| AppError::NotFound(messages.get(MessageKey::CatalogNotFound, segment)))
}

/// List one page of a catalog ordered by name.
#[utoipa::path(
    get,
    path = "/api/{kind}",
    tag = CATALOG_TAG,
    params(
        ("kind" = String, Path, description = "One of `genres`, `platforms`, `publishers`, `developers`"),
        ("page" = Option<u64>, Query, description = "Zero-based page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page, 1 to 100 (default: 20)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved entries", body = PaginatedCatalogEntriesDto),
        (status = 404, description = "Unknown catalog", body = ErrorDto),
        (status = 422, description = "Invalid page request", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_entries(
    State(state): State<AppState>,
    messages: Messages,
    Path(kind): Path<String>,
    Query(page): Query<PageParam>,
) -> Result<impl IntoResponse, AppError> {
    let kind = parse_kind(&messages, &kind)?;
    let service = CatalogService::new(&state.db, messages);

    let entries = service
        .get_paginated(kind, Some(page.into_page_request()?))
        .await?;

    Ok((StatusCode::OK, Json(entries.into_dto())))
}

/// Create a catalog entry.
///
/// Names are unique within a catalog.
///
/// # Access Control
/// - `Moderator` - Moderators and admins can create entries
///
/// # Returns
/// - `201 Created` - The created entry at version 0
/// - `404 Not Found` - Unknown catalog
/// - `409 Conflict` - Name already taken
/// - `422 Unprocessable Entity` - Blank name or overlong description
#[utoipa::path(
    post,
    path = "/api/{kind}",
    tag = CATALOG_TAG,
    params(
        ("kind" = String, Path, description = "One of `genres`, `platforms`, `publishers`, `developers`")
    ),
    request_body = CreateCatalogEntryDto,
    responses(
        (status = 201, description = "Successfully created entry", body = CatalogEntryDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Unknown catalog", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 422, description = "Invalid entry data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_entry(
    State(state): State<AppState>,
    messages: Messages,
    headers: HeaderMap,
    Path(kind): Path<String>,
    Json(payload): Json<CreateCatalogEntryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Moderator])?;

    let kind = parse_kind(&messages, &kind)?;
    let service = CatalogService::new(&state.db, messages);

    let entry = service
        .create(kind, CreateCatalogEntryParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(entry.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/{kind}/{id}",
    tag = CATALOG_TAG,
    params(
        ("kind" = String, Path, description = "One of `genres`, `platforms`, `publishers`, `developers`"),
        ("id" = i32, Path, description = "Entry ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved entry", body = CatalogEntryDto),
        (status = 404, description = "Unknown catalog or entry", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_entry(
    State(state): State<AppState>,
    messages: Messages,
    Path((kind, id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let kind = parse_kind(&messages, &kind)?;
    let service = CatalogService::new(&state.db, messages);

    let entry = service.get_by_id(kind, id).await?;

    Ok((StatusCode::OK, Json(entry.into_dto())))
}

/// Update a catalog entry.
///
/// # Access Control
/// - `Moderator` - Moderators and admins can update entries
///
/// # Returns
/// - `200 OK` - The updated entry
/// - `404 Not Found` - Unknown catalog or entry
/// - `409 Conflict` - Version is stale or name already taken
#[utoipa::path(
    put,
    path = "/api/{kind}/{id}",
    tag = CATALOG_TAG,
    params(
        ("kind" = String, Path, description = "One of `genres`, `platforms`, `publishers`, `developers`"),
        ("id" = i32, Path, description = "Entry ID")
    ),
    request_body = UpdateCatalogEntryDto,
    responses(
        (status = 200, description = "Successfully updated entry", body = CatalogEntryDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Unknown catalog or entry", body = ErrorDto),
        (status = 409, description = "Version conflict or name already taken", body = ErrorDto),
        (status = 422, description = "Invalid entry data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_entry(
    State(state): State<AppState>,
    messages: Messages,
    headers: HeaderMap,
    Path((kind, id)): Path<(String, i32)>,
    Json(payload): Json<UpdateCatalogEntryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Moderator])?;

    let kind = parse_kind(&messages, &kind)?;
    let service = CatalogService::new(&state.db, messages);

    let entry = service
        .update(kind, UpdateCatalogEntryParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(entry.into_dto())))
}

/// Delete a catalog entry after unlinking it from every game.
///
/// Deleting a platform also deletes the barcodes recorded for it.
///
/// # Access Control
/// - `Admin` - Only admins can delete entries
#[utoipa::path(
    delete,
    path = "/api/{kind}/{id}",
    tag = CATALOG_TAG,
    params(
        ("kind" = String, Path, description = "One of `genres`, `platforms`, `publishers`, `developers`"),
        ("id" = i32, Path, description = "Entry ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted entry"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Unknown catalog or entry", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_entry(
    State(state): State<AppState>,
    messages: Messages,
    headers: HeaderMap,
    Path((kind, id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Admin])?;

    let kind = parse_kind(&messages, &kind)?;
    let service = CatalogService::new(&state.db, messages);

    service.delete(kind, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List one page of the games linked to a catalog entry.
#[utoipa::path(
    get,
    path = "/api/{kind}/{id}/games",
    tag = CATALOG_TAG,
    params(
        ("kind" = String, Path, description = "One of `genres`, `platforms`, `publishers`, `developers`"),
        ("id" = i32, Path, description = "Entry ID"),
        ("page" = Option<u64>, Query, description = "Zero-based page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page, 1 to 100 (default: 20)"),
        ("sort" = Option<String>, Query, description = "Sort orders such as `title,desc;id`")
    ),
    responses(
        (status = 200, description = "Successfully retrieved games", body = PaginatedGamesDto),
        (status = 404, description = "Unknown catalog or entry", body = ErrorDto),
        (status = 422, description = "Invalid page request", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_entry_games(
    State(state): State<AppState>,
    messages: Messages,
    Path((kind, id)): Path<(String, i32)>,
    Query(page): Query<PageParam>,
) -> Result<impl IntoResponse, AppError> {
    let kind = parse_kind(&messages, &kind)?;
    let service = GameService::new(&state.db, messages);

    let games = service
        .find_by_association(kind, id, Some(page.into_page_request()?))
        .await?;

    Ok((StatusCode::OK, Json(games.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/{kind}/{id}/games/count",
    tag = CATALOG_TAG,
    params(
        ("kind" = String, Path, description = "One of `genres`, `platforms`, `publishers`, `developers`"),
        ("id" = i32, Path, description = "Entry ID")
    ),
    responses(
        (status = 200, description = "Number of linked games", body = CountDto),
        (status = 404, description = "Unknown catalog or entry", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn count_entry_games(
    State(state): State<AppState>,
    messages: Messages,
    Path((kind, id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let kind = parse_kind(&messages, &kind)?;
    let service = GameService::new(&state.db, messages);

    let count = service.count_by_association(kind, id).await?;

    Ok((StatusCode::OK, Json(CountDto { count })))
}

#[utoipa::path(
    get,
    path = "/api/{kind}/{id}/game-ids",
    tag = CATALOG_TAG,
    params(
        ("kind" = String, Path, description = "One of `genres`, `platforms`, `publishers`, `developers`"),
        ("id" = i32, Path, description = "Entry ID")
    ),
    responses(
        (status = 200, description = "Ids of linked games, ascending", body = Vec<i32>),
        (status = 404, description = "Unknown catalog or entry", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_entry_game_ids(
    State(state): State<AppState>,
    messages: Messages,
    Path((kind, id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let kind = parse_kind(&messages, &kind)?;
    let service = CatalogService::new(&state.db, messages);

    let ids = service.game_ids(kind, id).await?;

    Ok((StatusCode::OK, Json(ids)))
}
