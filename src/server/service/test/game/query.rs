use super::*;
use crate::server::service::{barcode::BarcodeService, franchise::FranchiseService};

/// Tests a paged query without a page request.
///
/// Expected: Err(AppError::InvalidArgument)
#[tokio::test]
async fn paged_query_requires_page_request() {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GameService::new(db, Messages::default())
        .find_paginated(GameFilter::all(), None)
        .await;

    assert!(matches!(result, Err(AppError::InvalidArgument(_))));
}

/// Tests counting without a filter.
///
/// Expected: Err(AppError::InvalidArgument)
#[tokio::test]
async fn count_requires_filter() {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GameService::new(db, Messages::default()).count(None).await;

    assert!(matches!(result, Err(AppError::InvalidArgument(_))));
}

/// Tests counting with a filter and no page request.
///
/// Expected: Ok with the number of matching games
#[tokio::test]
async fn counts_with_filter_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let franchise = factory::create_franchise(db).await?;
    factory::game::GameFactory::new(db)
        .franchise_id(Some(franchise.id))
        .build()
        .await?;
    factory::create_game(db).await?;

    let service = GameService::new(db, Messages::default());

    assert_eq!(service.count(Some(GameFilter::all())).await?, 2);
    assert_eq!(service.count_by_franchise(franchise.id).await?, 1);

    Ok(())
}

/// Tests a page size outside the allowed range.
///
/// Expected: Err(AppError::ValidationErr)
#[tokio::test]
async fn rejects_oversized_page() {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GameService::new(db, Messages::default())
        .find_paginated(GameFilter::all(), Some(PageRequest::new(0, 500)))
        .await;

    assert!(matches!(result, Err(AppError::ValidationErr(_))));
}

/// Tests a page number whose row offset overflows.
///
/// Expected: Err(AppError::ValidationErr) for games, catalog entries, franchises and barcodes
#[tokio::test]
async fn rejects_page_number_past_offset_range() {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let huge = || Some(PageRequest::new(u64::MAX / 2, 20));

    let games = GameService::new(db, Messages::default())
        .find_paginated(GameFilter::all(), huge())
        .await;
    let genres = CatalogService::new(db, Messages::default())
        .get_paginated(AssociationKind::Genre, huge())
        .await;
    let franchises = FranchiseService::new(db, Messages::default())
        .get_paginated(huge())
        .await;
    let barcodes = BarcodeService::new(db, Messages::default())
        .get_paginated(huge())
        .await;

    assert!(matches!(games, Err(AppError::ValidationErr(_))));
    assert!(matches!(genres, Err(AppError::ValidationErr(_))));
    assert!(matches!(franchises, Err(AppError::ValidationErr(_))));
    assert!(matches!(barcodes, Err(AppError::ValidationErr(_))));
}

/// Tests querying games of a catalog entry that does not exist.
///
/// Expected: Err(AppError::NotFound) for both the list and the count
#[tokio::test]
async fn unknown_entry_is_not_found() {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GameService::new(db, Messages::default());

    let listed = service
        .find_by_association(AssociationKind::Platform, 12, Some(PageRequest::new(0, 10)))
        .await;
    let counted = service
        .count_by_association(AssociationKind::Platform, 12)
        .await;
    let by_franchise = service
        .find_by_franchise(12, Some(PageRequest::new(0, 10)))
        .await;

    assert!(matches!(listed, Err(AppError::NotFound(_))));
    assert!(matches!(counted, Err(AppError::NotFound(_))));
    assert!(matches!(by_franchise, Err(AppError::NotFound(_))));
}

/// Tests that paged results carry their modes.
///
/// Expected: Ok with the mode attached to the listed game
#[tokio::test]
async fn paged_games_include_modes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    factory::create_mode(db, game.id, "MULTIPLAYER").await?;

    let page = GameService::new(db, Messages::default())
        .find_paginated(GameFilter::all(), Some(PageRequest::new(0, 20)))
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(
        page.items[0].game_modes,
        BTreeSet::from([GameMode::Multiplayer])
    );

    Ok(())
}

/// Tests listing every game without a page request.
///
/// Expected: Ok with all games ordered by id, modes attached
#[tokio::test]
async fn unpaged_list_returns_every_game() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_game(db).await?;
    let second = factory::create_game(db).await?;
    factory::create_mode(db, second.id, "SINGLE_PLAYER").await?;

    let games = GameService::new(db, Messages::default()).find_all().await?;

    let ids: Vec<i32> = games.iter().map(|game| game.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert!(games[1].game_modes.contains(&GameMode::SinglePlayer));

    Ok(())
}
