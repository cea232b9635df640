use super::*;

/// Tests a partial settings update.
///
/// Verifies that only the provided fields change.
///
/// Expected: Ok(Some) with name and visibility changed, description kept
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let board = factory::board::BoardFactory::new(db, owner.id)
        .description(Some("Keep me".to_string()))
        .build()
        .await?;

    let repo = BoardRepository::new(db);
    let updated = repo
        .update(UpdateBoardParams {
            id: board.id,
            name: Some("Renamed".to_string()),
            visibility: Some(Visibility::Public),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.visibility, Visibility::Public);
    assert_eq!(updated.description.as_deref(), Some("Keep me"));

    Ok(())
}

/// Tests updating a board that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_board() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BoardRepository::new(db);
    let updated = repo
        .update(UpdateBoardParams {
            id: 404,
            name: Some("Nope".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}

/// Tests deleting a board.
///
/// Verifies that deleting removes the board's columns and cards with it.
///
/// Expected: Ok(true) and no remaining columns or cards
#[tokio::test]
async fn delete_cascades_to_columns_and_cards() -> Result<(), DbErr> {
    use sea_orm::{EntityTrait, PaginatorTrait};

    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, board) = factory::helpers::create_board_with_owner(db).await?;
    factory::helpers::create_column_with_cards(db, board.id, 2).await?;

    let repo = BoardRepository::new(db);
    let deleted = repo.delete(board.id).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::BoardColumn::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Card::find().count(db).await?, 0);

    Ok(())
}
