use super::*;

/// Tests adding dates for two regions.
///
/// Expected: Ok with two rows ordered by region
#[tokio::test]
async fn adds_one_row_per_region() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let repo = ReleaseDateRepository::new(db);
    let pal = repo
        .upsert(
            game.id,
            NewReleaseDate {
                region: GameRegion::Pal,
                release_date: NaiveDate::from_ymd_opt(2001, 11, 15).unwrap(),
            },
            Utc::now(),
        )
        .await?;
    repo.upsert(
        game.id,
        NewReleaseDate {
            region: GameRegion::NtscJ,
            release_date: NaiveDate::from_ymd_opt(2001, 9, 14).unwrap(),
        },
        Utc::now(),
    )
    .await?;

    assert!(pal.id > 0);
    assert_eq!(pal.version, 0);

    let regions: Vec<String> = repo
        .find_for_game(game.id)
        .await?
        .into_iter()
        .map(|row| row.region)
        .collect();
    assert_eq!(regions, vec!["NTSC_J", "PAL"]);

    Ok(())
}

/// Tests replacing the date of an existing region.
///
/// Verifies that the row keeps its id, takes the new date and increments its version.
///
/// Expected: Ok with a single row for the region
#[tokio::test]
async fn replaces_date_of_same_region() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let original = factory::create_release_date(
        db,
        game.id,
        "NTSC_U",
        NaiveDate::from_ymd_opt(2004, 11, 9).unwrap(),
    )
    .await?;

    let repo = ReleaseDateRepository::new(db);
    let replaced = repo
        .upsert(
            game.id,
            NewReleaseDate {
                region: GameRegion::NtscU,
                release_date: NaiveDate::from_ymd_opt(2004, 11, 16).unwrap(),
            },
            Utc::now(),
        )
        .await?;

    assert_eq!(replaced.id, original.id);
    assert_eq!(replaced.version, original.version + 1);
    assert_eq!(
        replaced.release_date,
        NaiveDate::from_ymd_opt(2004, 11, 16).unwrap()
    );
    assert_eq!(repo.find_for_game(game.id).await?.len(), 1);

    Ok(())
}
