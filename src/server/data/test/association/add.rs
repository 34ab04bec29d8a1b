use super::*;

/// Tests that a link is visible from both sides.
///
/// Verifies that after adding a genre to a game the genre is among the game's genres and the
/// game is among the genre's games.
///
/// Expected: Ok(true) and both directions contain the other id
#[tokio::test]
async fn link_is_visible_from_both_sides() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let genre = factory::create_genre(db).await?;

    let repo = AssociationRepository::new(db);
    let added = repo.add(AssociationKind::Genre, game.id, genre.id).await?;

    assert!(added);
    assert_eq!(
        repo.target_ids(AssociationKind::Genre, game.id).await?,
        vec![genre.id]
    );
    assert_eq!(
        repo.game_ids(AssociationKind::Genre, genre.id).await?,
        vec![game.id]
    );

    Ok(())
}

/// Tests that adding an existing link is a no-op.
///
/// Expected: Ok(false) and a single join row
#[tokio::test]
async fn adding_twice_keeps_one_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let platform = factory::create_platform(db).await?;

    let repo = AssociationRepository::new(db);
    assert!(repo.add(AssociationKind::Platform, game.id, platform.id).await?);
    assert!(!repo.add(AssociationKind::Platform, game.id, platform.id).await?);

    assert_eq!(
        repo.target_ids(AssociationKind::Platform, game.id).await?,
        vec![platform.id]
    );

    Ok(())
}

/// Tests that association kinds do not share join rows.
///
/// Verifies that a publisher link is invisible when reading developers, even when the
/// publisher and developer happen to share an id.
///
/// Expected: Ok with developers empty
#[tokio::test]
async fn kinds_are_independent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let publisher = factory::create_publisher(db).await?;
    factory::create_developer(db).await?;

    let repo = AssociationRepository::new(db);
    repo.add(AssociationKind::Publisher, game.id, publisher.id)
        .await?;

    assert!(repo
        .target_ids(AssociationKind::Developer, game.id)
        .await?
        .is_empty());
    assert!(repo
        .contains(AssociationKind::Publisher, game.id, publisher.id)
        .await?);

    Ok(())
}
