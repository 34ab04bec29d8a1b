use super::*;

/// Tests that filter criteria combine with AND.
///
/// Verifies that only the game linked to both the genre and the platform matches when both
/// criteria are set, while each criterion alone matches more games.
///
/// Expected: Ok with one game and total 1
#[tokio::test]
async fn combines_criteria_with_and() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let genre = factory::create_genre(db).await?;
    let platform = factory::create_platform(db).await?;
    let both = factory::create_game(db).await?;
    let genre_only = factory::create_game(db).await?;
    let platform_only = factory::create_game(db).await?;
    factory::link_genre(db, both.id, genre.id).await?;
    factory::link_platform(db, both.id, platform.id).await?;
    factory::link_genre(db, genre_only.id, genre.id).await?;
    factory::link_platform(db, platform_only.id, platform.id).await?;

    let repo = GameRepository::new(db);
    let filter = GameFilter::by_association(AssociationKind::Genre, genre.id)
        .with_association(AssociationKind::Platform, platform.id);
    let (games, total) = repo.find_page(&filter, &PageRequest::new(0, 10)).await?;

    assert_eq!(total, 1);
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].id, both.id);

    let genre_filter = GameFilter::by_association(AssociationKind::Genre, genre.id);
    assert_eq!(repo.count(&genre_filter).await?, 2);

    Ok(())
}

/// Tests that an empty filter matches every game.
///
/// Expected: Ok with total equal to the number of games
#[tokio::test]
async fn empty_filter_matches_all() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_game(db).await?;
    }

    let (games, total) = GameRepository::new(db)
        .find_page(&GameFilter::all(), &PageRequest::new(0, 2))
        .await?;

    assert_eq!(total, 3);
    assert_eq!(games.len(), 2);

    Ok(())
}

/// Tests filtering by franchise together with sorting.
///
/// Verifies that the franchise criterion excludes games of other franchises and that the
/// requested sort order applies.
///
/// Expected: Ok with franchise games ordered by title descending
#[tokio::test]
async fn filters_by_franchise_and_sorts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let franchise = factory::create_franchise(db).await?;
    let other = factory::create_franchise(db).await?;
    factory::game::GameFactory::new(db)
        .title("Alpha")
        .franchise_id(Some(franchise.id))
        .build()
        .await?;
    factory::game::GameFactory::new(db)
        .title("Omega")
        .franchise_id(Some(franchise.id))
        .build()
        .await?;
    factory::game::GameFactory::new(db)
        .title("Zeta")
        .franchise_id(Some(other.id))
        .build()
        .await?;

    let page = PageRequest::new(0, 10).with_sort(SortOrder {
        field: SortField::Title,
        direction: SortDirection::Desc,
    });
    let (games, total) = GameRepository::new(db)
        .find_page(&GameFilter::by_franchise(franchise.id), &page)
        .await?;

    assert_eq!(total, 2);
    let titles: Vec<&str> = games.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["Omega", "Alpha"]);

    Ok(())
}

/// Tests requesting a page past the end.
///
/// Expected: Ok with no games and the full total
#[tokio::test]
async fn page_past_end_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_game(db).await?;

    let (games, total) = GameRepository::new(db)
        .find_page(&GameFilter::all(), &PageRequest::new(5, 10))
        .await?;

    assert!(games.is_empty());
    assert_eq!(total, 1);

    Ok(())
}
