use super::*;

/// Tests updating with the current version.
///
/// Expected: Ok(1) and version incremented by one
#[tokio::test]
async fn updates_with_current_version() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let publisher = factory::create_publisher(db).await?;

    let repo = CatalogRepository::new(db);
    let rows = repo
        .update_versioned(
            AssociationKind::Publisher,
            UpdateCatalogEntryParams {
                id: publisher.id,
                name: "Renamed".to_string(),
                description: None,
                version: publisher.version,
            },
            Utc::now(),
        )
        .await?;

    assert_eq!(rows, 1);
    let updated = repo
        .find_by_id(AssociationKind::Publisher, publisher.id)
        .await?
        .unwrap();
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.version, publisher.version + 1);

    Ok(())
}

/// Tests updating with a stale version.
///
/// Expected: Ok(0) and the stored entry unchanged
#[tokio::test]
async fn stale_version_changes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let developer = factory::create_developer(db).await?;

    let repo = CatalogRepository::new(db);
    let rows = repo
        .update_versioned(
            AssociationKind::Developer,
            UpdateCatalogEntryParams {
                id: developer.id,
                name: "Renamed".to_string(),
                description: None,
                version: developer.version + 3,
            },
            Utc::now(),
        )
        .await?;

    assert_eq!(rows, 0);
    let stored = repo
        .find_by_id(AssociationKind::Developer, developer.id)
        .await?
        .unwrap();
    assert_eq!(stored.name, developer.name);
    assert_eq!(stored.version, developer.version);

    Ok(())
}
