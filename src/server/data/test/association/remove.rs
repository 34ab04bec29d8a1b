use super::*;

/// Tests that removing a link clears both sides.
///
/// Expected: Ok(true) and neither side references the other
#[tokio::test]
async fn add_then_remove_leaves_no_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let developer = factory::create_developer(db).await?;

    let repo = AssociationRepository::new(db);
    repo.add(AssociationKind::Developer, game.id, developer.id)
        .await?;
    let removed = repo
        .remove(AssociationKind::Developer, game.id, developer.id)
        .await?;

    assert!(removed);
    assert!(repo
        .target_ids(AssociationKind::Developer, game.id)
        .await?
        .is_empty());
    assert!(repo
        .game_ids(AssociationKind::Developer, developer.id)
        .await?
        .is_empty());

    Ok(())
}

/// Tests removing a pair that was never linked.
///
/// Expected: Ok(false)
#[tokio::test]
async fn removing_absent_link_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let genre = factory::create_genre(db).await?;

    let repo = AssociationRepository::new(db);
    let removed = repo.remove(AssociationKind::Genre, game.id, genre.id).await?;

    assert!(!removed);

    Ok(())
}

/// Tests unlinking a catalog entry from every game at once.
///
/// Verifies that only links to the given entry are removed.
///
/// Expected: Ok(2) and the other genre stays linked
#[tokio::test]
async fn removes_all_links_to_target() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_game(db).await?;
    let second = factory::create_game(db).await?;
    let removed_genre = factory::create_genre(db).await?;
    let kept_genre = factory::create_genre(db).await?;
    factory::link_genre(db, first.id, removed_genre.id).await?;
    factory::link_genre(db, second.id, removed_genre.id).await?;
    factory::link_genre(db, first.id, kept_genre.id).await?;

    let repo = AssociationRepository::new(db);
    let removed = repo
        .remove_all_for_target(AssociationKind::Genre, removed_genre.id)
        .await?;

    assert_eq!(removed, 2);
    assert_eq!(
        repo.target_ids(AssociationKind::Genre, first.id).await?,
        vec![kept_genre.id]
    );
    assert!(repo
        .target_ids(AssociationKind::Genre, second.id)
        .await?
        .is_empty());

    Ok(())
}
