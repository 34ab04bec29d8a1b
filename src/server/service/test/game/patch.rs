use super::*;
use crate::server::model::code::PersistedCode;

/// Tests applying an empty patch.
///
/// Expected: Ok with every field unchanged
#[tokio::test]
async fn empty_patch_leaves_fields_unchanged() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let franchise = factory::create_franchise(db).await?;
    let stored = factory::game::GameFactory::new(db)
        .title("Metroid Prime")
        .description(Some("First-person adventure"))
        .age_rating(Some(AgeRating::Teen.code()))
        .franchise_id(Some(franchise.id))
        .build()
        .await?;
    factory::create_mode(db, stored.id, "SINGLE_PLAYER").await?;

    let service = GameService::new(db, Messages::default());
    let before = service.get_by_id(stored.id).await?;
    let after = service.patch(stored.id, Some(GamePatch::default())).await?;

    assert_eq!(after.title, before.title);
    assert_eq!(after.description, before.description);
    assert_eq!(after.age_rating, before.age_rating);
    assert_eq!(after.franchise_id, before.franchise_id);
    assert_eq!(after.game_modes, before.game_modes);

    Ok(())
}

/// Tests patching only the title.
///
/// Expected: Ok with the new title and all other fields unchanged
#[tokio::test]
async fn title_patch_changes_only_title() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::game::GameFactory::new(db)
        .title("Old Title")
        .description(Some("Kept"))
        .build()
        .await?;

    let patch: GamePatch = serde_json::from_str(r#"{"title": "New Title", "id": 999}"#).unwrap();
    let patched = GameService::new(db, Messages::default())
        .patch(stored.id, Some(patch))
        .await?;

    assert_eq!(patched.id, stored.id);
    assert_eq!(patched.title, "New Title");
    assert_eq!(patched.description.as_deref(), Some("Kept"));
    assert_eq!(patched.age_rating, AgeRating::RatingPending);

    Ok(())
}

/// Tests clearing nullable fields with explicit nulls.
///
/// Expected: Ok with description and franchise cleared
#[tokio::test]
async fn null_clears_nullable_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let franchise = factory::create_franchise(db).await?;
    let stored = factory::game::GameFactory::new(db)
        .description(Some("Going away"))
        .franchise_id(Some(franchise.id))
        .build()
        .await?;

    let patch: GamePatch =
        serde_json::from_str(r#"{"description": null, "franchise_id": null}"#).unwrap();
    let patched = GameService::new(db, Messages::default())
        .patch(stored.id, Some(patch))
        .await?;

    assert_eq!(patched.description, None);
    assert_eq!(patched.franchise_id, None);

    Ok(())
}

/// Tests patching with a stale expected version.
///
/// Expected: Err(AppError::ConcurrencyConflict)
#[tokio::test]
async fn stale_patch_version_conflicts() {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::game::GameFactory::new(db)
        .version(3)
        .build()
        .await
        .unwrap();

    let patch = GamePatch {
        version: Some(1),
        ..GamePatch::default()
    };
    let result = GameService::new(db, Messages::default())
        .patch(stored.id, Some(patch))
        .await;

    assert!(matches!(result, Err(AppError::ConcurrencyConflict(_))));
}

/// Tests patching without a document.
///
/// Expected: Err(AppError::InvalidArgument)
#[tokio::test]
async fn missing_patch_is_invalid_argument() {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_game(db).await.unwrap();

    let result = GameService::new(db, Messages::default())
        .patch(stored.id, None)
        .await;

    assert!(matches!(result, Err(AppError::InvalidArgument(_))));
}

/// Tests patching a game that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_game_is_not_found() {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GameService::new(db, Messages::default())
        .patch(404, Some(GamePatch::default()))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}
