use super::*;
use crate::server::service::release_date::ReleaseDateService;

/// Tests deleting a game with links and owned children.
///
/// Verifies that the linked genre survives but no longer lists the game, and that the
/// game's own rows are gone.
///
/// Expected: Ok, then NotFound when reading the game or its release dates
#[tokio::test]
async fn cascades_to_links_and_children() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let genre = factory::create_genre(db).await?;
    let platform = factory::create_platform(db).await?;
    factory::link_genre(db, game.id, genre.id).await?;
    factory::create_mode(db, game.id, "SINGLE_PLAYER").await?;
    factory::create_dlc(db, game.id).await?;
    factory::create_barcode(db, game.id, platform.id).await?;
    factory::create_release_date(
        db,
        game.id,
        "PAL",
        chrono::NaiveDate::from_ymd_opt(2007, 10, 10).unwrap(),
    )
    .await?;

    let service = GameService::new(db, Messages::default());
    service.delete(game.id).await?;

    assert!(matches!(
        service.get_by_id(game.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        ReleaseDateService::new(db, Messages::default())
            .find_for_game_id(game.id)
            .await,
        Err(AppError::NotFound(_))
    ));
    assert_eq!(
        service
            .count_by_association(AssociationKind::Genre, genre.id)
            .await?,
        0
    );

    Ok(())
}

/// Tests deleting a game that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_game_is_not_found() {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GameService::new(db, Messages::default()).delete(5).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}
