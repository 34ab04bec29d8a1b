use crate::server::{
    error::AppError,
    i18n::Messages,
    model::franchise::{CreateFranchiseParams, UpdateFranchiseParams},
    service::{franchise::FranchiseService, game::GameService},
};
use test_utils::{builder::TestBuilder, factory};

/// Tests creating and renaming a franchise.
///
/// Expected: Ok with version 0 after create and 1 after update
#[tokio::test]
async fn create_then_update() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = FranchiseService::new(db, Messages::default());
    let created = service
        .create(CreateFranchiseParams {
            title: "Zelda".to_string(),
            description: None,
        })
        .await?;
    let updated = service
        .update(UpdateFranchiseParams {
            id: created.id,
            title: "The Legend of Zelda".to_string(),
            description: Some("Hyrule".to_string()),
            version: created.version,
        })
        .await?;

    assert_eq!(created.version, 0);
    assert_eq!(updated.version, 1);
    assert_eq!(updated.title, "The Legend of Zelda");

    Ok(())
}

/// Tests updating a franchise with the largest representable version.
///
/// Expected: Err(AppError::ConcurrencyConflict)
#[tokio::test]
async fn max_version_update_conflicts() {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let franchise = factory::create_franchise(db).await.unwrap();

    let result = FranchiseService::new(db, Messages::default())
        .update(UpdateFranchiseParams {
            id: franchise.id,
            title: "Metroid".to_string(),
            description: None,
            version: i32::MAX,
        })
        .await;

    assert!(matches!(result, Err(AppError::ConcurrencyConflict(_))));
}

/// Tests deleting a franchise that still has games.
///
/// Expected: Ok with the game kept and its franchise cleared
#[tokio::test]
async fn delete_clears_franchise_of_games() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let franchise = factory::create_franchise(db).await?;
    let game = factory::game::GameFactory::new(db)
        .franchise_id(Some(franchise.id))
        .build()
        .await?;

    let service = FranchiseService::new(db, Messages::default());
    service.delete(franchise.id).await?;

    let kept = GameService::new(db, Messages::default())
        .get_by_id(game.id)
        .await?;
    assert_eq!(kept.franchise_id, None);
    assert!(matches!(
        service.get_by_id(franchise.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting a franchise that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn delete_missing_is_not_found() {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FranchiseService::new(db, Messages::default())
        .delete(3)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}
