use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        game::{CreateDownloadableContentDto, DownloadableContentDto},
    },
    server::{
        error::AppError,
        i18n::Messages,
        middleware::auth::{AuthGuard, Permission},
        model::downloadable_content::CreateDownloadableContentParams,
        service::downloadable_content::DownloadableContentService,
        state::AppState,
    },
};

/// Tag for grouping downloadable content endpoints in OpenAPI documentation
pub static DOWNLOADABLE_CONTENT_TAG: &str = "downloadable content";

#[utoipa::path(
    get,
    path = "/api/games/{id}/downloadable-contents",
    tag = DOWNLOADABLE_CONTENT_TAG,
    params(("id" = i32, Path, description = "Game ID")),
    responses(
        (status = 200, description = "Successfully retrieved downloadable content", body = Vec<DownloadableContentDto>),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_downloadable_contents(
    State(state): State<AppState>,
    messages: Messages,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = DownloadableContentService::new(&state.db, messages);

    let contents = service.find_for_game_id(id).await?;
    let contents: Vec<DownloadableContentDto> =
        contents.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(contents)))
}

/// Add downloadable content to a game.
///
/// # Access Control
/// - `Moderator` - Moderators and admins can add downloadable content
#[utoipa::path(
    post,
    path = "/api/games/{id}/downloadable-contents",
    tag = DOWNLOADABLE_CONTENT_TAG,
    params(("id" = i32, Path, description = "Game ID")),
    request_body = CreateDownloadableContentDto,
    responses(
        (status = 201, description = "Successfully added downloadable content", body = DownloadableContentDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 422, description = "Invalid downloadable content data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn add_downloadable_content(
    State(state): State<AppState>,
    messages: Messages,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CreateDownloadableContentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Moderator])?;

    let service = DownloadableContentService::new(&state.db, messages);

    let content = service
        .add(id, CreateDownloadableContentParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(content.into_dto())))
}

/// Remove downloadable content from a game. The content is deleted.
#[utoipa::path(
    delete,
    path = "/api/games/{id}/downloadable-contents/{dlc_id}",
    tag = DOWNLOADABLE_CONTENT_TAG,
    params(
        ("id" = i32, Path, description = "Game ID"),
        ("dlc_id" = i32, Path, description = "Downloadable content ID")
    ),
    responses(
        (status = 204, description = "Successfully removed downloadable content"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Game or downloadable content not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn remove_downloadable_content(
    State(state): State<AppState>,
    messages: Messages,
    headers: HeaderMap,
    Path((id, dlc_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Moderator])?;

    let service = DownloadableContentService::new(&state.db, messages);

    service.remove(id, dlc_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
