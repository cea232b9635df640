use super::*;

/// Tests creating a board with defaults.
///
/// Verifies that a new board starts private with an empty column order.
///
/// Expected: Ok with board created
#[tokio::test]
async fn creates_board_with_empty_column_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let repo = BoardRepository::new(db);
    let board = repo
        .create(CreateBoardParams {
            owner_id: owner.id,
            name: "Roadmap".to_string(),
            description: Some("Q3 work".to_string()),
            visibility: Visibility::default(),
            background_color: None,
        })
        .await?;

    assert_eq!(board.name, "Roadmap");
    assert_eq!(board.owner_id, owner.id);
    assert_eq!(board.visibility, Visibility::Private);
    assert!(board.ordered_column_ids.is_empty());

    let found = repo.find_by_id(board.id).await?.unwrap();
    assert_eq!(found.id, board.id);
    assert_eq!(found.description.as_deref(), Some("Q3 work"));

    Ok(())
}

/// Tests looking up a board that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_board() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BoardRepository::new(db);
    let found = repo.find_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}
