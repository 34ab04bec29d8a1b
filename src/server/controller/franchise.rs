use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{CountDto, ErrorDto},
        franchise::{CreateFranchiseDto, FranchiseDto, PaginatedFranchisesDto, UpdateFranchiseDto},
        game::PaginatedGamesDto,
    },
    server::{
        controller::param::PageParam,
        error::AppError,
        i18n::Messages,
        middleware::auth::{AuthGuard, Permission},
        model::franchise::{CreateFranchiseParams, UpdateFranchiseParams},
        service::{franchise::FranchiseService, game::GameService},
        state::AppState,
    },
};

/// Tag for grouping franchise endpoints in OpenAPI documentation
pub static FRANCHISE_TAG: &str = "franchise";

#[utoipa::path(
    get,
    path = "/api/franchises",
    tag = FRANCHISE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Zero-based page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page, 1 to 100 (default: 20)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved franchises", body = PaginatedFranchisesDto),
        (status = 422, description = "Invalid page request", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_franchises(
    State(state): State<AppState>,
    messages: Messages,
    Query(page): Query<PageParam>,
) -> Result<impl IntoResponse, AppError> {
    let service = FranchiseService::new(&state.db, messages);

    let franchises = service
        .get_paginated(Some(page.into_page_request()?))
        .await?;

    Ok((StatusCode::OK, Json(franchises.into_dto())))
}

/// Create a franchise.
///
/// # Access Control
/// - `Moderator` - Moderators and admins can create franchises
#[utoipa::path(
    post,
    path = "/api/franchises",
    tag = FRANCHISE_TAG,
    request_body = CreateFranchiseDto,
    responses(
        (status = 201, description = "Successfully created franchise", body = FranchiseDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 422, description = "Invalid franchise data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_franchise(
    State(state): State<AppState>,
    messages: Messages,
    headers: HeaderMap,
    Json(payload): Json<CreateFranchiseDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Moderator])?;

    let service = FranchiseService::new(&state.db, messages);

    let franchise = service
        .create(CreateFranchiseParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(franchise.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/franchises/{id}",
    tag = FRANCHISE_TAG,
    params(("id" = i32, Path, description = "Franchise ID")),
    responses(
        (status = 200, description = "Successfully retrieved franchise", body = FranchiseDto),
        (status = 404, description = "Franchise not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_franchise(
    State(state): State<AppState>,
    messages: Messages,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = FranchiseService::new(&state.db, messages);

    let franchise = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(franchise.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/franchises/{id}",
    tag = FRANCHISE_TAG,
    params(("id" = i32, Path, description = "Franchise ID")),
    request_body = UpdateFranchiseDto,
    responses(
        (status = 200, description = "Successfully updated franchise", body = FranchiseDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Franchise not found", body = ErrorDto),
        (status = 409, description = "Version conflict", body = ErrorDto),
        (status = 422, description = "Invalid franchise data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_franchise(
    State(state): State<AppState>,
    messages: Messages,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateFranchiseDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Moderator])?;

    let service = FranchiseService::new(&state.db, messages);

    let franchise = service
        .update(UpdateFranchiseParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(franchise.into_dto())))
}

/// Delete a franchise. Its games remain without a franchise.
///
/// # Access Control
/// - `Admin` - Only admins can delete franchises
#[utoipa::path(
    delete,
    path = "/api/franchises/{id}",
    tag = FRANCHISE_TAG,
    params(("id" = i32, Path, description = "Franchise ID")),
    responses(
        (status = 204, description = "Successfully deleted franchise"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Franchise not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_franchise(
    State(state): State<AppState>,
    messages: Messages,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Admin])?;

    let service = FranchiseService::new(&state.db, messages);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/franchises/{id}/games",
    tag = FRANCHISE_TAG,
    params(
        ("id" = i32, Path, description = "Franchise ID"),
        ("page" = Option<u64>, Query, description = "Zero-based page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page, 1 to 100 (default: 20)"),
        ("sort" = Option<String>, Query, description = "Sort orders such as `title,desc;id`")
    ),
    responses(
        (status = 200, description = "Successfully retrieved games", body = PaginatedGamesDto),
        (status = 404, description = "Franchise not found", body = ErrorDto),
        (status = 422, description = "Invalid page request", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_franchise_games(
    State(state): State<AppState>,
    messages: Messages,
    Path(id): Path<i32>,
    Query(page): Query<PageParam>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db, messages);

    let games = service
        .find_by_franchise(id, Some(page.into_page_request()?))
        .await?;

    Ok((StatusCode::OK, Json(games.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/franchises/{id}/games/count",
    tag = FRANCHISE_TAG,
    params(("id" = i32, Path, description = "Franchise ID")),
    responses(
        (status = 200, description = "Number of games in the franchise", body = CountDto),
        (status = 404, description = "Franchise not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn count_franchise_games(
    State(state): State<AppState>,
    messages: Messages,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let count = GameService::new(&state.db, messages)
        .count_by_franchise(id)
        .await?;

    Ok((StatusCode::OK, Json(CountDto { count })))
}
