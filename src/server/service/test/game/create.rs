use super::*;

fn params(title: &str) -> CreateGameParams {
    CreateGameParams {
        title: title.to_string(),
        description: None,
        age_rating: None,
        franchise_id: None,
        game_modes: BTreeSet::from([GameMode::CoOperative]),
    }
}

/// Tests creating a game without a rating.
///
/// Expected: Ok with a positive id, version 0 and a pending rating
#[tokio::test]
async fn creates_game_with_pending_rating() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = GameService::new(db, Messages::default())
        .create(params("Portal 2"))
        .await?;

    assert!(game.id > 0);
    assert_eq!(game.version, 0);
    assert_eq!(game.age_rating, AgeRating::RatingPending);
    assert_eq!(game.game_modes, BTreeSet::from([GameMode::CoOperative]));

    Ok(())
}

/// Tests reading a stored game whose rating column is null.
///
/// Expected: Ok with a pending rating
#[tokio::test]
async fn null_rating_reads_as_pending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::game::GameFactory::new(db)
        .age_rating(None)
        .build()
        .await?;

    let game = GameService::new(db, Messages::default())
        .get_by_id(stored.id)
        .await?;

    assert_eq!(game.age_rating, AgeRating::RatingPending);

    Ok(())
}

/// Tests creating a game with a blank title.
///
/// Expected: Err(AppError::ValidationErr)
#[tokio::test]
async fn rejects_blank_title() {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GameService::new(db, Messages::default())
        .create(params("   "))
        .await;

    assert!(matches!(result, Err(AppError::ValidationErr(_))));
}

/// Tests creating a game in a franchise that does not exist.
///
/// Expected: Err(AppError::NotFound) and no game stored
#[tokio::test]
async fn rejects_unknown_franchise() {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GameService::new(db, Messages::default());
    let mut create = params("Half-Life 3");
    create.franchise_id = Some(77);

    let result = service.create(create).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(service.find_all().await.unwrap().is_empty());
}
