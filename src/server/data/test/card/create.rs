use super::*;

/// Tests inserting a card.
///
/// Expected: Ok with the card stored in the given column and position
#[tokio::test]
async fn creates_card_in_column() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, board) = factory::helpers::create_board_with_owner(db).await?;
    let column = factory::create_column(db, board.id).await?;

    let repo = CardRepository::new(db);
    let card = repo
        .create(NewCard {
            board_id: board.id,
            column_id: column.id,
            name: "Write release notes".to_string(),
            description: None,
            due_date: None,
            completed: false,
            completed_at: None,
            position: 0,
        })
        .await?;

    assert_eq!(card.column_id, column.id);
    assert_eq!(card.board_id, board.id);
    assert_eq!(card.position, 0);

    let cards = repo.get_by_column(column.id).await?;
    assert_eq!(cards.len(), 1);

    Ok(())
}

/// Tests inserting a card into a column that does not exist.
///
/// Expected: Err from the foreign key
#[tokio::test]
async fn fails_for_missing_column() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, board) = factory::helpers::create_board_with_owner(db).await?;

    let repo = CardRepository::new(db);
    let result = repo
        .create(NewCard {
            board_id: board.id,
            column_id: 999,
            name: "Orphan".to_string(),
            description: None,
            due_date: None,
            completed: false,
            completed_at: None,
            position: 0,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests listing a board's cards.
///
/// Expected: Ok with cards grouped by column and ordered by position
#[tokio::test]
async fn get_by_board_groups_by_column() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, board) = factory::helpers::create_board_with_owner(db).await?;
    let (first, first_cards) = factory::helpers::create_column_with_cards(db, board.id, 2).await?;
    let (second, second_cards) = factory::helpers::create_column_with_cards(db, board.id, 1).await?;

    let repo = CardRepository::new(db);
    let cards = repo.get_by_board(board.id).await?;
    let placement: Vec<(i32, i32)> = cards.iter().map(|c| (c.column_id, c.id)).collect();

    assert_eq!(
        placement,
        vec![
            (first.id, first_cards[0].id),
            (first.id, first_cards[1].id),
            (second.id, second_cards[0].id),
        ]
    );

    Ok(())
}
