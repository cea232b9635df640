use super::*;

/// Tests rewriting the board of a column's cards.
///
/// Verifies that only cards in that column are touched.
///
/// Expected: Ok(2) and the other column's card unchanged
#[tokio::test]
async fn set_board_for_column_touches_only_that_column() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, source) = factory::helpers::create_board_with_owner(db).await?;
    let (_, target) = factory::helpers::create_board_with_owner(db).await?;
    let (moving, _) = factory::helpers::create_column_with_cards(db, source.id, 2).await?;
    let (staying, staying_cards) = factory::helpers::create_column_with_cards(db, source.id, 1).await?;

    let repo = CardRepository::new(db);
    let updated = repo.set_board_for_column(moving.id, target.id).await?;

    assert_eq!(updated, 2);
    for card in repo.get_by_column(moving.id).await? {
        assert_eq!(card.board_id, target.id);
    }
    let untouched = repo.find_by_id(staying_cards[0].id).await?.unwrap();
    assert_eq!(untouched.board_id, source.id);
    assert_eq!(untouched.column_id, staying.id);

    Ok(())
}

/// Tests moving a card into another column.
///
/// Expected: Ok with the card's column and position rewritten
#[tokio::test]
async fn set_column_moves_card() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, board) = factory::helpers::create_board_with_owner(db).await?;
    let (source, cards) = factory::helpers::create_column_with_cards(db, board.id, 1).await?;
    let target = factory::create_column(db, board.id).await?;

    let repo = CardRepository::new(db);
    repo.set_column(cards[0].id, target.id, 0).await?;

    assert!(repo.get_by_column(source.id).await?.is_empty());
    assert_eq!(repo.max_position(target.id).await?, Some(0));

    Ok(())
}
