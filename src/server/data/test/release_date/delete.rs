use super::*;

/// Tests that a release date can only be deleted through its own game.
///
/// Expected: Ok(0) for the wrong game, Ok(1) for the owner
#[tokio::test]
async fn deletes_only_through_owning_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_game(db).await?;
    let other = factory::create_game(db).await?;
    let release = factory::create_release_date(
        db,
        owner.id,
        "PAL",
        NaiveDate::from_ymd_opt(1998, 12, 11).unwrap(),
    )
    .await?;

    let repo = ReleaseDateRepository::new(db);

    assert_eq!(repo.delete(other.id, release.id).await?, 0);
    assert_eq!(repo.delete(owner.id, release.id).await?, 1);
    assert!(repo.find_for_game(owner.id).await?.is_empty());

    Ok(())
}
