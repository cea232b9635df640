use super::*;

/// Tests unassigning a user.
///
/// Expected: Ok(true) the first time, Ok(false) once nothing is left to remove
#[tokio::test]
async fn deletes_single_assignment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, board) = factory::helpers::create_board_with_owner(db).await?;
    let (_, cards) = factory::helpers::create_column_with_cards(db, board.id, 1).await?;
    factory::create_card_member(db, cards[0].id, owner.id).await?;

    let repo = CardMemberRepository::new(db);

    assert!(repo.delete(cards[0].id, owner.id).await?);
    assert!(!repo.delete(cards[0].id, owner.id).await?);
    assert!(repo.user_ids(cards[0].id).await?.is_empty());

    Ok(())
}

/// Tests dropping a user's assignments on one board.
///
/// Verifies that assignments on the user's other boards and other users' assignments
/// on the same board are kept.
///
/// Expected: Ok(2) with only the targeted board's assignments gone
#[tokio::test]
async fn deletes_assignments_scoped_to_board() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, board) = factory::helpers::create_board_with_owner(db).await?;
    let (_, other) = factory::helpers::create_board_with_owner(db).await?;
    let member = factory::helpers::create_user_with_role(db, board.id, "member").await?;
    factory::create_member(db, other.id, member.id, "member").await?;

    let (_, cards) = factory::helpers::create_column_with_cards(db, board.id, 2).await?;
    let (_, elsewhere) = factory::helpers::create_column_with_cards(db, other.id, 1).await?;
    factory::create_card_member(db, cards[0].id, member.id).await?;
    factory::create_card_member(db, cards[1].id, member.id).await?;
    factory::create_card_member(db, cards[1].id, owner.id).await?;
    factory::create_card_member(db, elsewhere[0].id, member.id).await?;

    let repo = CardMemberRepository::new(db);
    let removed = repo.delete_for_board_user(board.id, member.id).await?;

    assert_eq!(removed, 2);
    assert_eq!(repo.user_ids(cards[1].id).await?, vec![owner.id]);
    assert_eq!(repo.user_ids(elsewhere[0].id).await?, vec![member.id]);

    Ok(())
}
