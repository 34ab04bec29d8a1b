use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{CountDto, ErrorDto},
        game::{CreateGameDto, GameDto, PaginatedGamesDto, UpdateGameDto},
    },
    server::{
        controller::param::{GameFilterParam, PageParam},
        error::{validation::ValidationError, AppError},
        i18n::Messages,
        middleware::auth::{AuthGuard, Permission},
        model::{
            game::{CreateGameParams, UpdateGameParams},
            patch::GamePatch,
        },
        service::game::GameService,
        state::AppState,
    },
};

/// Tag for grouping game endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

/// List games.
///
/// Returns one page of games matching every filter criterion given in the query. Without
/// criteria all games are listed.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Page of games
/// - `422 Unprocessable Entity` - Page size outside `1..=100` or unknown sort field
#[utoipa::path(
    get,
    path = "/api/games",
    tag = GAME_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Zero-based page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page, 1 to 100 (default: 20)"),
        ("sort" = Option<String>, Query, description = "Sort orders such as `title,desc;id`"),
        ("genre_id" = Option<i32>, Query, description = "Only games with this genre"),
        ("platform_id" = Option<i32>, Query, description = "Only games on this platform"),
        ("publisher_id" = Option<i32>, Query, description = "Only games by this publisher"),
        ("developer_id" = Option<i32>, Query, description = "Only games by this developer"),
        ("franchise_id" = Option<i32>, Query, description = "Only games in this franchise")
    ),
    responses(
        (status = 200, description = "Successfully retrieved games", body = PaginatedGamesDto),
        (status = 422, description = "Invalid page request", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_games(
    State(state): State<AppState>,
    messages: Messages,
    Query(page): Query<PageParam>,
    Query(filter): Query<GameFilterParam>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db, messages);

    let page = page.into_page_request()?;
    let games = service
        .find_paginated(filter.into_filter(), Some(page))
        .await?;

    Ok((StatusCode::OK, Json(games.into_dto())))
}

/// Create a game.
///
/// # Access Control
/// - `Moderator` - Moderators and admins can create games
///
/// # Returns
/// - `201 Created` - The created game at version 0
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Token lacks the moderator role
/// - `404 Not Found` - Referenced franchise does not exist
/// - `422 Unprocessable Entity` - Blank title or overlong description
#[utoipa::path(
    post,
    path = "/api/games",
    tag = GAME_TAG,
    request_body = CreateGameDto,
    responses(
        (status = 201, description = "Successfully created game", body = GameDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Franchise not found", body = ErrorDto),
        (status = 422, description = "Invalid game data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_game(
    State(state): State<AppState>,
    messages: Messages,
    headers: HeaderMap,
    Json(payload): Json<CreateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Moderator])?;

    let service = GameService::new(&state.db, messages);

    let game = service.create(CreateGameParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(game.into_dto())))
}

/// Count games matching the filter criteria in the query.
/// List every game, ordered by id, without paging.
#[utoipa::path(
    get,
    path = "/api/games/all",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "Every game ordered by id", body = Vec<GameDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_games(
    State(state): State<AppState>,
    messages: Messages,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db, messages);

    let games: Vec<GameDto> = service
        .find_all()
        .await?
        .into_iter()
        .map(|game| game.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(games)))
}

#[utoipa::path(
    get,
    path = "/api/games/count",
    tag = GAME_TAG,
    params(
        ("genre_id" = Option<i32>, Query, description = "Only games with this genre"),
        ("platform_id" = Option<i32>, Query, description = "Only games on this platform"),
        ("publisher_id" = Option<i32>, Query, description = "Only games by this publisher"),
        ("developer_id" = Option<i32>, Query, description = "Only games by this developer"),
        ("franchise_id" = Option<i32>, Query, description = "Only games in this franchise")
    ),
    responses(
        (status = 200, description = "Number of matching games", body = CountDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn count_games(
    State(state): State<AppState>,
    messages: Messages,
    Query(filter): Query<GameFilterParam>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db, messages);

    let count = service.count(Some(filter.into_filter())).await?;

    Ok((StatusCode::OK, Json(CountDto { count })))
}

#[utoipa::path(
    get,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Game ID")),
    responses(
        (status = 200, description = "Successfully retrieved game", body = GameDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game(
    State(state): State<AppState>,
    messages: Messages,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = GameService::new(&state.db, messages);

    let game = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Replace a game's fields and play modes.
///
/// The body carries the version the client last read. The update is rejected with 409 when
/// another request changed the game in the meantime.
///
/// # Access Control
/// - `Moderator` - Moderators and admins can update games
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `messages` - Messages in the request locale
/// - `headers` - Request headers carrying the bearer token
/// - `id` - Game ID
/// - `payload` - Full game state including the expected version
///
/// # Returns
/// - `200 OK` - The updated game with its version incremented
/// - `404 Not Found` - Game or franchise does not exist
/// - `409 Conflict` - Version is stale
/// - `422 Unprocessable Entity` - Invalid game data
#[utoipa::path(
    put,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Game ID")),
    request_body = UpdateGameDto,
    responses(
        (status = 200, description = "Successfully updated game", body = GameDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Game or franchise not found", body = ErrorDto),
        (status = 409, description = "Version conflict", body = ErrorDto),
        (status = 422, description = "Invalid game data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_game(
    State(state): State<AppState>,
    messages: Messages,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Moderator])?;

    let service = GameService::new(&state.db, messages);

    let game = service
        .update(UpdateGameParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Apply a JSON merge patch to a game.
///
/// Present fields overwrite, absent fields stay and `null` clears nullable fields. An
/// optional `version` in the document is checked against the stored version.
///
/// # Access Control
/// - `Moderator` - Moderators and admins can patch games
///
/// # Returns
/// - `200 OK` - The patched game
/// - `400 Bad Request` - Body missing or `null`
/// - `404 Not Found` - Game does not exist
/// - `409 Conflict` - Version in the document is stale
/// - `422 Unprocessable Entity` - Malformed document or invalid merged state
#[utoipa::path(
    patch,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Game ID")),
    request_body(content = Object, content_type = "application/merge-patch+json"),
    responses(
        (status = 200, description = "Successfully patched game", body = GameDto),
        (status = 400, description = "Patch document missing", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 409, description = "Version conflict", body = ErrorDto),
        (status = 422, description = "Malformed patch document", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn patch_game(
    State(state): State<AppState>,
    messages: Messages,
    headers: HeaderMap,
    Path(id): Path<i32>,
    payload: Option<Json<serde_json::Value>>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Moderator])?;

    let service = GameService::new(&state.db, messages);

    let patch = match payload {
        Some(Json(serde_json::Value::Null)) | None => None,
        Some(Json(document)) => Some(
            serde_json::from_value::<GamePatch>(document)
                .map_err(|err| ValidationError::MalformedPatch(err.to_string()))?,
        ),
    };

    let game = service.patch(id, patch).await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Delete a game with its associations, release dates, downloadable content and barcodes.
///
/// # Access Control
/// - `Admin` - Only admins can delete games
#[utoipa::path(
    delete,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Game ID")),
    responses(
        (status = 204, description = "Successfully deleted game"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_game(
    State(state): State<AppState>,
    messages: Messages,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Admin])?;

    let service = GameService::new(&state.db, messages);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
