use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, catalog::CatalogEntryDto, game::GameDto},
    server::{
        controller::catalog::parse_kind,
        error::AppError,
        i18n::Messages,
        middleware::auth::{AuthGuard, Permission},
        service::{catalog::CatalogService, game::GameService},
        state::AppState,
    },
};

/// Tag for grouping game association endpoints in OpenAPI documentation
pub static GAME_ASSOCIATION_TAG: &str = "game association";

/// List the genres, platforms, publishers or developers of a game, ordered by name.
#[utoipa::path(
    get,
    path = "/api/games/{id}/{kind}",
    tag = GAME_ASSOCIATION_TAG,
    params(
        ("id" = i32, Path, description = "Game ID"),
        ("kind" = String, Path, description = "One of `genres`, `platforms`, `publishers`, `developers`")
    ),
    responses(
        (status = 200, description = "Successfully retrieved associated entries", body = Vec<CatalogEntryDto>),
        (status = 404, description = "Game or association kind not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game_associations(
    State(state): State<AppState>,
    messages: Messages,
    Path((id, kind)): Path<(i32, String)>,
) -> Result<impl IntoResponse, AppError> {
    let kind = parse_kind(&messages, &kind)?;
    let service = CatalogService::new(&state.db, messages);

    let entries = service.find_for_game_id(kind, id).await?;
    let entries: Vec<CatalogEntryDto> = entries.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(entries)))
}

/// Replace the association set of a game.
///
/// Ids that do not resolve to an existing entry are skipped. Entries missing from the body
/// are unlinked from the game.
///
/// # Access Control
/// - `Moderator` - Moderators and admins can change associations
///
/// # Returns
/// - `200 OK` - The game after the change
/// - `400 Bad Request` - Body is `null`
/// - `404 Not Found` - Game or association kind not found
#[utoipa::path(
    put,
    path = "/api/games/{id}/{kind}",
    tag = GAME_ASSOCIATION_TAG,
    params(
        ("id" = i32, Path, description = "Game ID"),
        ("kind" = String, Path, description = "One of `genres`, `platforms`, `publishers`, `developers`")
    ),
    request_body = Vec<i32>,
    responses(
        (status = 200, description = "Successfully replaced associations", body = GameDto),
        (status = 400, description = "Id collection missing", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Game or association kind not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn replace_game_associations(
    State(state): State<AppState>,
    messages: Messages,
    headers: HeaderMap,
    Path((id, kind)): Path<(i32, String)>,
    Json(ids): Json<Option<Vec<i32>>>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Moderator])?;

    let kind = parse_kind(&messages, &kind)?;
    let service = GameService::new(&state.db, messages);

    let game = service.save_associations_for_game_id(kind, id, ids).await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Add entries to the association set of a game, keeping existing members.
///
/// # Access Control
/// - `Moderator` - Moderators and admins can change associations
#[utoipa::path(
    post,
    path = "/api/games/{id}/{kind}",
    tag = GAME_ASSOCIATION_TAG,
    params(
        ("id" = i32, Path, description = "Game ID"),
        ("kind" = String, Path, description = "One of `genres`, `platforms`, `publishers`, `developers`")
    ),
    request_body = Vec<i32>,
    responses(
        (status = 200, description = "Successfully merged associations", body = GameDto),
        (status = 400, description = "Id collection missing", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Game or association kind not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn merge_game_associations(
    State(state): State<AppState>,
    messages: Messages,
    headers: HeaderMap,
    Path((id, kind)): Path<(i32, String)>,
    Json(ids): Json<Option<Vec<i32>>>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Moderator])?;

    let kind = parse_kind(&messages, &kind)?;
    let service = GameService::new(&state.db, messages);

    let game = service
        .update_associations_for_game_id(kind, id, ids)
        .await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}
