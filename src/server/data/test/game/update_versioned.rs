use super::*;

fn params_for(game: &entity::game::Model, version: i32) -> UpdateGameParams {
    UpdateGameParams {
        id: game.id,
        title: "Updated".to_string(),
        description: Some("Updated description".to_string()),
        age_rating: Some(AgeRating::Teen),
        franchise_id: None,
        game_modes: BTreeSet::new(),
        version,
    }
}

/// Tests updating with the current version.
///
/// Expected: Ok(1) with fields replaced and version incremented by one
#[tokio::test]
async fn updates_with_current_version() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::game::GameFactory::new(db).version(4).build().await?;

    let repo = GameRepository::new(db);
    let rows = repo
        .update_versioned(&params_for(&game, 4), Utc::now())
        .await?;

    assert_eq!(rows, 1);
    let stored = repo.find_by_id(game.id).await?.unwrap();
    assert_eq!(stored.title, "Updated");
    assert_eq!(
        stored.age_rating,
        Some(AgeRating::encode_optional(Some(AgeRating::Teen)))
    );
    assert_eq!(stored.version, 5);

    Ok(())
}

/// Tests updating with a stale version.
///
/// Expected: Ok(0) with the stored row unchanged
#[tokio::test]
async fn stale_version_changes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::game::GameFactory::new(db).version(2).build().await?;

    let repo = GameRepository::new(db);
    let rows = repo
        .update_versioned(&params_for(&game, 1), Utc::now())
        .await?;

    assert_eq!(rows, 0);
    let stored = repo.find_by_id(game.id).await?.unwrap();
    assert_eq!(stored.title, game.title);
    assert_eq!(stored.version, 2);

    Ok(())
}

/// Tests bumping the version without changing fields.
///
/// Expected: Ok(1) for the current version, Ok(0) for the old one
#[tokio::test]
async fn touch_bumps_version_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let repo = GameRepository::new(db);
    assert_eq!(repo.touch(game.id, 0, Utc::now()).await?, 1);
    assert_eq!(repo.touch(game.id, 0, Utc::now()).await?, 0);

    let stored = repo.find_by_id(game.id).await?.unwrap();
    assert_eq!(stored.title, game.title);
    assert_eq!(stored.version, 1);

    Ok(())
}

/// Tests updating and touching with the largest representable version.
///
/// Expected: Ok(0) from both with the stored row unchanged
#[tokio::test]
async fn max_version_changes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let repo = GameRepository::new(db);
    let rows = repo
        .update_versioned(&params_for(&game, i32::MAX), Utc::now())
        .await?;

    assert_eq!(rows, 0);
    assert_eq!(repo.touch(game.id, i32::MAX, Utc::now()).await?, 0);
    let stored = repo.find_by_id(game.id).await?.unwrap();
    assert_eq!(stored.title, game.title);
    assert_eq!(stored.version, 0);

    Ok(())
}
