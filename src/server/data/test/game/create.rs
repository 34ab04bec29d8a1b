use super::*;

/// Tests creating a game with modes.
///
/// Verifies that the game row starts at version 0, the absent rating is stored as pending
/// and each mode gets its own row.
///
/// Expected: Ok with two mode rows
#[tokio::test]
async fn creates_game_with_modes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    let game = repo
        .create(
            CreateGameParams {
                title: "Rocket League".to_string(),
                description: None,
                age_rating: None,
                franchise_id: None,
                game_modes: BTreeSet::from([GameMode::SinglePlayer, GameMode::OnlineMultiplayer]),
            },
            Utc::now(),
        )
        .await?;

    assert_eq!(game.version, 0);
    assert_eq!(game.age_rating, Some(AgeRating::encode_optional(None)));

    let mut modes: Vec<String> = repo
        .find_modes(game.id)
        .await?
        .into_iter()
        .map(|row| row.mode)
        .collect();
    modes.sort();
    assert_eq!(modes, vec!["ONLINE_MULTIPLAYER", "SINGLE_PLAYER"]);

    Ok(())
}

/// Tests that deleting a game's modes leaves other games untouched.
///
/// Expected: Ok(1) and the other game keeps its mode
#[tokio::test]
async fn deletes_modes_of_one_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_game(db).await?;
    let second = factory::create_game(db).await?;
    factory::create_mode(db, first.id, "MULTIPLAYER").await?;
    factory::create_mode(db, second.id, "MULTIPLAYER").await?;

    let repo = GameRepository::new(db);
    let deleted = repo.delete_modes(first.id).await?;

    assert_eq!(deleted, 1);
    assert!(repo.find_modes(first.id).await?.is_empty());
    assert_eq!(repo.find_modes(second.id).await?.len(), 1);

    let grouped = repo.find_modes_for(&[first.id, second.id]).await?;
    assert!(!grouped.contains_key(&first.id));
    assert_eq!(grouped[&second.id].len(), 1);

    Ok(())
}
