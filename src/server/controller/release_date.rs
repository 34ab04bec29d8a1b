use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        game::{CreateReleaseDateDto, ReleaseDateDto},
    },
    server::{
        error::AppError,
        i18n::Messages,
        middleware::auth::{AuthGuard, Permission},
        model::release_date::CreateReleaseDateParams,
        service::release_date::ReleaseDateService,
        state::AppState,
    },
};

/// Tag for grouping release date endpoints in OpenAPI documentation
pub static RELEASE_DATE_TAG: &str = "release date";

#[utoipa::path(
    get,
    path = "/api/games/{id}/release-dates",
    tag = RELEASE_DATE_TAG,
    params(("id" = i32, Path, description = "Game ID")),
    responses(
        (status = 200, description = "Successfully retrieved release dates", body = Vec<ReleaseDateDto>),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_release_dates(
    State(state): State<AppState>,
    messages: Messages,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReleaseDateService::new(&state.db, messages);

    let release_dates = service.find_for_game_id(id).await?;
    let release_dates: Vec<ReleaseDateDto> =
        release_dates.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(release_dates)))
}

/// Set the release date of a game in one region.
///
/// A second date for the same region replaces the first.
///
/// # Access Control
/// - `Moderator` - Moderators and admins can edit release dates
///
/// # Returns
/// - `201 Created` - The stored release date
/// - `404 Not Found` - Game does not exist
/// - `422 Unprocessable Entity` - Region or date missing
#[utoipa::path(
    post,
    path = "/api/games/{id}/release-dates",
    tag = RELEASE_DATE_TAG,
    params(("id" = i32, Path, description = "Game ID")),
    request_body = CreateReleaseDateDto,
    responses(
        (status = 201, description = "Successfully stored release date", body = ReleaseDateDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 422, description = "Region or date missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn add_release_date(
    State(state): State<AppState>,
    messages: Messages,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CreateReleaseDateDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Moderator])?;

    let service = ReleaseDateService::new(&state.db, messages);

    let release_date = service
        .add(id, CreateReleaseDateParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(release_date.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/games/{id}/release-dates/{release_date_id}",
    tag = RELEASE_DATE_TAG,
    params(
        ("id" = i32, Path, description = "Game ID"),
        ("release_date_id" = i32, Path, description = "Release date ID")
    ),
    responses(
        (status = 204, description = "Successfully removed release date"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Game or release date not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn remove_release_date(
    State(state): State<AppState>,
    messages: Messages,
    headers: HeaderMap,
    Path((id, release_date_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Moderator])?;

    let service = ReleaseDateService::new(&state.db, messages);

    service.remove(id, release_date_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
