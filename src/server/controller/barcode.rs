use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        barcode::{BarcodeDto, CreateBarcodeDto, PaginatedBarcodesDto},
    },
    server::{
        controller::param::PageParam,
        error::AppError,
        i18n::Messages,
        middleware::auth::{AuthGuard, Permission},
        model::barcode::CreateBarcodeParams,
        service::barcode::BarcodeService,
        state::AppState,
    },
};

/// Tag for grouping barcode endpoints in OpenAPI documentation
pub static BARCODE_TAG: &str = "barcode";

#[utoipa::path(
    get,
    path = "/api/barcodes",
    tag = BARCODE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Zero-based page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page, 1 to 100 (default: 20)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved barcodes", body = PaginatedBarcodesDto),
        (status = 422, description = "Invalid page request", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_barcodes(
    State(state): State<AppState>,
    messages: Messages,
    Query(page): Query<PageParam>,
) -> Result<impl IntoResponse, AppError> {
    let service = BarcodeService::new(&state.db, messages);

    let barcodes = service
        .get_paginated(Some(page.into_page_request()?))
        .await?;

    Ok((StatusCode::OK, Json(barcodes.into_dto())))
}

/// Record the barcode printed on a game's packaging for one platform.
///
/// # Access Control
/// - `Moderator` - Moderators and admins can record barcodes
///
/// # Returns
/// - `201 Created` - The stored barcode
/// - `404 Not Found` - Game or platform does not exist
/// - `409 Conflict` - Barcode already recorded
/// - `422 Unprocessable Entity` - Digit count does not match the barcode type
#[utoipa::path(
    post,
    path = "/api/barcodes",
    tag = BARCODE_TAG,
    request_body = CreateBarcodeDto,
    responses(
        (status = 201, description = "Successfully recorded barcode", body = BarcodeDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Game or platform not found", body = ErrorDto),
        (status = 409, description = "Barcode already recorded", body = ErrorDto),
        (status = 422, description = "Invalid barcode", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_barcode(
    State(state): State<AppState>,
    messages: Messages,
    headers: HeaderMap,
    Json(payload): Json<CreateBarcodeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.jwt, &headers).require(&[Permission::Moderator])?;

    let service = BarcodeService::new(&state.db, messages);

    let barcode = service.create(CreateBarcodeParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(barcode.into_dto())))
}

/// Look up a barcode, e.g. from a scanner.
#[utoipa::path(
    get,
    path = "/api/barcodes/{barcode}",
    tag = BARCODE_TAG,
    params(("barcode" = String, Path, description = "UPC-A or EAN-13 digits")),
    responses(
        (status = 200, description = "Successfully retrieved barcode", body = BarcodeDto),
        (status = 404, description = "Barcode not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_barcode(
    State(state): State<AppState>,
    messages: Messages,
    Path(barcode): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = BarcodeService::new(&state.db, messages);

    let barcode = service.find_by_barcode(&barcode).await?;

    Ok((StatusCode::OK, Json(barcode.into_dto())))
}
