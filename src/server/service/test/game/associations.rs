use super::*;

/// Tests replacing a genre set with a smaller one.
///
/// Verifies that genres leaving the set no longer list the game from their side either.
///
/// Expected: Ok with exactly the remaining genre on both sides
#[tokio::test]
async fn replace_unlinks_removed_members() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let first = factory::create_genre(db).await?;
    let second = factory::create_genre(db).await?;
    let third = factory::create_genre(db).await?;

    let service = GameService::new(db, Messages::default());
    service
        .save_associations_for_game_id(
            AssociationKind::Genre,
            game.id,
            Some(vec![first.id, second.id, third.id]),
        )
        .await?;
    service
        .save_associations_for_game_id(AssociationKind::Genre, game.id, Some(vec![second.id]))
        .await?;

    assert_eq!(genre_ids(db, game.id).await?, vec![second.id]);

    let page = Some(PageRequest::new(0, 10));
    let from_first = service
        .find_by_association(AssociationKind::Genre, first.id, page.clone())
        .await?;
    let from_third = service
        .find_by_association(AssociationKind::Genre, third.id, page.clone())
        .await?;
    let from_second = service
        .find_by_association(AssociationKind::Genre, second.id, page)
        .await?;

    assert_eq!(from_first.total, 0);
    assert_eq!(from_third.total, 0);
    assert_eq!(from_second.items[0].id, game.id);

    Ok(())
}

/// Tests merging ids into an existing genre set.
///
/// Expected: Ok with the union of old and new members
#[tokio::test]
async fn merge_keeps_existing_members() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let first = factory::create_genre(db).await?;
    let second = factory::create_genre(db).await?;
    factory::link_genre(db, game.id, first.id).await?;

    GameService::new(db, Messages::default())
        .update_associations_for_game_id(AssociationKind::Genre, game.id, Some(vec![second.id]))
        .await?;

    let mut expected = vec![first.id, second.id];
    expected.sort();
    assert_eq!(genre_ids(db, game.id).await?, expected);

    Ok(())
}

/// Tests that ids without a matching entry are skipped.
///
/// Expected: Ok with only the resolvable genre linked
#[tokio::test]
async fn drops_unresolved_ids() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let genre = factory::create_genre(db).await?;

    GameService::new(db, Messages::default())
        .save_associations_for_game_id(
            AssociationKind::Genre,
            game.id,
            Some(vec![genre.id, genre.id + 1000]),
        )
        .await?;

    assert_eq!(genre_ids(db, game.id).await?, vec![genre.id]);

    Ok(())
}

/// Tests that the version only moves when the set actually changes.
///
/// Expected: Ok with version 1 after the first replace and after repeating it
#[tokio::test]
async fn unchanged_set_keeps_version() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let platform = factory::create_platform(db).await?;

    let service = GameService::new(db, Messages::default());
    let changed = service
        .save_associations_for_game_id(AssociationKind::Platform, game.id, Some(vec![platform.id]))
        .await?;
    let repeated = service
        .save_associations_for_game_id(AssociationKind::Platform, game.id, Some(vec![platform.id]))
        .await?;

    assert_eq!(changed.version, 1);
    assert_eq!(repeated.version, 1);

    Ok(())
}

/// Tests replacing associations without an id collection.
///
/// Expected: Err(AppError::InvalidArgument)
#[tokio::test]
async fn missing_ids_is_invalid_argument() {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await.unwrap();

    let result = GameService::new(db, Messages::default())
        .save_associations_for_game_id(AssociationKind::Publisher, game.id, None)
        .await;

    assert!(matches!(result, Err(AppError::InvalidArgument(_))));
}

/// Tests replacing associations of a game that does not exist.
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

    let developer = factory::create_developer(db).await.unwrap();

    let result = GameService::new(db, Messages::default())
        .update_associations_for_game_id(AssociationKind::Developer, 999, Some(vec![developer.id]))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

/// Tests linking and unlinking a single entry.
///
/// Verifies that the link is visible from the entry's side after adding and gone after
/// removing.
///
/// Expected: Ok with counts 1 then 0
#[tokio::test]
async fn add_then_remove_single_entry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let publisher = factory::create_publisher(db).await?;

    let service = GameService::new(db, Messages::default());

    service
        .add_association(AssociationKind::Publisher, game.id, publisher.id)
        .await?;
    assert_eq!(
        service
            .count_by_association(AssociationKind::Publisher, publisher.id)
            .await?,
        1
    );

    service
        .remove_association(AssociationKind::Publisher, game.id, publisher.id)
        .await?;
    assert_eq!(
        service
            .count_by_association(AssociationKind::Publisher, publisher.id)
            .await?,
        0
    );

    Ok(())
}

/// Tests linking an entry that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn add_unknown_entry_is_not_found() {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await.unwrap();

    let result = GameService::new(db, Messages::default())
        .add_association(AssociationKind::Genre, game.id, 42)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}
