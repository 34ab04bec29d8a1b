use super::*;

/// Tests creating an entry in each catalog.
///
/// Verifies that every kind writes to its own table and starts at version 0.
///
/// Expected: Ok with the entry readable under its kind only
#[tokio::test]
async fn creates_entry_of_each_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CatalogRepository::new(db);

    for kind in AssociationKind::ALL {
        let entry = repo
            .create(
                kind,
                CreateCatalogEntryParams {
                    name: format!("{} entry", kind),
                    description: Some("Created in test".to_string()),
                },
                Utc::now(),
            )
            .await?;

        assert_eq!(entry.kind, kind);
        assert_eq!(entry.version, 0);
        assert_eq!(entry.name, format!("{} entry", kind));

        let found = repo.find_by_id(kind, entry.id).await?.unwrap();
        assert_eq!(found.name, entry.name);
    }

    Ok(())
}

/// Tests that names are unique within a catalog.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::catalog::create_platform_named(db, "Dreamcast").await?;

    let result = CatalogRepository::new(db)
        .create(
            AssociationKind::Platform,
            CreateCatalogEntryParams {
                name: "Dreamcast".to_string(),
                description: None,
            },
            Utc::now(),
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
