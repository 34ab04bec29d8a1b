use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        barcode, catalog, downloadable_content, franchise, game, game_association, release_date,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Trak", description = "Video game catalog API"),
    modifiers(&BearerAuth)
)]
struct ApiDoc;

/// Registers the `bearer` scheme referenced by write endpoints.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds every API route plus the Swagger UI at `/swagger-ui`.
///
/// Routes with a fixed first segment such as `/api/games` take precedence over the catalog
/// routes under `/api/{kind}`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(game::get_games, game::create_game))
        .routes(routes!(game::count_games))
        .routes(routes!(game::get_all_games))
        .routes(routes!(
            game::get_game,
            game::update_game,
            game::patch_game,
            game::delete_game
        ))
        .routes(routes!(
            release_date::get_release_dates,
            release_date::add_release_date
        ))
        .routes(routes!(release_date::remove_release_date))
        .routes(routes!(
            downloadable_content::get_downloadable_contents,
            downloadable_content::add_downloadable_content
        ))
        .routes(routes!(downloadable_content::remove_downloadable_content))
        .routes(routes!(
            game_association::get_game_associations,
            game_association::replace_game_associations,
            game_association::merge_game_associations
        ))
        .routes(routes!(franchise::get_franchises, franchise::create_franchise))
        .routes(routes!(
            franchise::get_franchise,
            franchise::update_franchise,
            franchise::delete_franchise
        ))
        .routes(routes!(franchise::get_franchise_games))
        .routes(routes!(franchise::count_franchise_games))
        .routes(routes!(barcode::get_barcodes, barcode::create_barcode))
        .routes(routes!(barcode::get_barcode))
        .routes(routes!(catalog::get_entries, catalog::create_entry))
        .routes(routes!(
            catalog::get_entry,
            catalog::update_entry,
            catalog::delete_entry
        ))
        .routes(routes!(catalog::get_entry_games))
        .routes(routes!(catalog::count_entry_games))
        .routes(routes!(catalog::get_entry_game_ids))
        .split_for_parts();

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}
