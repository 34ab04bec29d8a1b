use super::*;

/// Tests resolving a mix of known and unknown ids.
///
/// Expected: Ok with only the ids that exist
#[tokio::test]
async fn keeps_only_existing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_genre(db).await?;
    let second = factory::create_genre(db).await?;

    let requested = BTreeSet::from([first.id, second.id, 9_999]);
    let resolved = CatalogRepository::new(db)
        .existing_ids(AssociationKind::Genre, &requested)
        .await?;

    assert_eq!(resolved, BTreeSet::from([first.id, second.id]));

    Ok(())
}

/// Tests that ids of another catalog do not resolve.
///
/// Expected: Ok with an empty set
#[tokio::test]
async fn ignores_ids_of_other_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let platform = factory::create_platform(db).await?;

    let resolved = CatalogRepository::new(db)
        .existing_ids(AssociationKind::Publisher, &BTreeSet::from([platform.id]))
        .await?;

    assert!(resolved.is_empty());

    Ok(())
}
