use super::*;

fn update_for(id: i32, version: i32) -> UpdateGameParams {
    UpdateGameParams {
        id,
        title: "Halo 2".to_string(),
        description: None,
        age_rating: Some(AgeRating::Mature),
        franchise_id: None,
        game_modes: BTreeSet::from([GameMode::OnlineMultiplayer]),
        version,
    }
}

/// Tests updating with the stored version.
///
/// Expected: Ok with version incremented by exactly one and modes replaced
#[tokio::test]
async fn current_version_increments_by_one() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::game::GameFactory::new(db).version(6).build().await?;
    factory::create_mode(db, stored.id, "SINGLE_PLAYER").await?;

    let updated = GameService::new(db, Messages::default())
        .update(update_for(stored.id, 6))
        .await?;

    assert_eq!(updated.version, 7);
    assert_eq!(updated.title, "Halo 2");
    assert_eq!(updated.age_rating, AgeRating::Mature);
    assert_eq!(
        updated.game_modes,
        BTreeSet::from([GameMode::OnlineMultiplayer])
    );

    Ok(())
}

/// Tests updating with a stale version.
///
/// Expected: Err(AppError::ConcurrencyConflict) and the stored game unchanged
#[tokio::test]
async fn stale_version_conflicts() {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::game::GameFactory::new(db)
        .version(2)
        .build()
        .await
        .unwrap();

    let service = GameService::new(db, Messages::default());
    let result = service.update(update_for(stored.id, 1)).await;

    assert!(matches!(result, Err(AppError::ConcurrencyConflict(_))));

    let unchanged = service.get_by_id(stored.id).await.unwrap();
    assert_eq!(unchanged.title, stored.title);
    assert_eq!(unchanged.version, 2);
}

/// Tests updating with the largest representable version.
///
/// Expected: Err(AppError::ConcurrencyConflict) and the stored game unchanged
#[tokio::test]
async fn max_version_conflicts() {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_game(db).await.unwrap();

    let service = GameService::new(db, Messages::default());
    let result = service.update(update_for(stored.id, i32::MAX)).await;

    assert!(matches!(result, Err(AppError::ConcurrencyConflict(_))));
    assert_eq!(service.get_by_id(stored.id).await.unwrap().version, 0);
}

/// Tests updating a game that does not exist.
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

    let result = GameService::new(db, Messages::default())
        .update(update_for(31, 0))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

/// Tests moving a game into a franchise that does not exist.
///
/// Expected: Err(AppError::NotFound) with the version untouched
#[tokio::test]
async fn unknown_franchise_is_not_found() {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_game(db).await.unwrap();
    let mut params = update_for(stored.id, 0);
    params.franchise_id = Some(88);

    let service = GameService::new(db, Messages::default());
    let result = service.update(params).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(service.get_by_id(stored.id).await.unwrap().version, 0);
}
