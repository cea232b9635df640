use super::*;

/// Tests recording an entry about a card.
///
/// Expected: Ok with the action and details read back unchanged
#[tokio::test]
async fn records_card_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, board) = factory::helpers::create_board_with_owner(db).await?;
    let (_, cards) = factory::helpers::create_column_with_cards(db, board.id, 1).await?;

    let repo = ActivityRepository::new(db);
    repo.record(NewActivity::card(
        board.id,
        cards[0].id,
        owner.id,
        ActivityAction::CardMoved,
        json!({ "from_column_id": 1, "to_column_id": 2 }),
    ))
    .await?;

    let entries = repo.get_by_card(cards[0].id, Page::default()).await?;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].action, ActivityAction::CardMoved);
    assert_eq!(entries[0].user_id, owner.id);
    assert_eq!(entries[0].details["to_column_id"], 2);
    assert_eq!(repo.count_by_card(cards[0].id).await?, 1);

    Ok(())
}

/// Tests that entries about a card outlive the card.
///
/// Expected: Ok with the entry still counted on the board
#[tokio::test]
async fn entries_survive_card_deletion() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, board) = factory::helpers::create_board_with_owner(db).await?;
    let (_, cards) = factory::helpers::create_column_with_cards(db, board.id, 1).await?;

    let repo = ActivityRepository::new(db);
    repo.record(NewActivity::card(
        board.id,
        cards[0].id,
        owner.id,
        ActivityAction::CardDeleted,
        json!({ "card_name": cards[0].name }),
    ))
    .await?;
    crate::server::data::card::CardRepository::new(db)
        .delete(cards[0].id)
        .await?;

    assert_eq!(repo.count_by_board(board.id).await?, 1);
    assert_eq!(repo.count_by_card(cards[0].id).await?, 1);

    Ok(())
}
