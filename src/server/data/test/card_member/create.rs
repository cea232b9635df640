use super::*;

/// Tests assigning two users to a card.
///
/// Expected: Ok with assignees listed in assignment order and joined with their user rows
#[tokio::test]
async fn lists_assignees_in_assignment_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, board) = factory::helpers::create_board_with_owner(db).await?;
    let member = factory::helpers::create_user_with_role(db, board.id, "member").await?;
    let (_, cards) = factory::helpers::create_column_with_cards(db, board.id, 1).await?;

    let repo = CardMemberRepository::new(db);
    repo.create(cards[0].id, member.id).await?;
    repo.create(cards[0].id, owner.id).await?;

    let assignees = repo.get_by_card(cards[0].id).await?;
    let ids: Vec<i32> = assignees.iter().map(|a| a.user_id).collect();
    assert_eq!(ids, vec![member.id, owner.id]);
    assert_eq!(assignees[0].username, member.username);
    assert_eq!(assignees[0].card_id, cards[0].id);

    Ok(())
}

/// Tests assigning the same user twice.
///
/// Expected: Err from the unique assignment index
#[tokio::test]
async fn rejects_duplicate_assignment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, board) = factory::helpers::create_board_with_owner(db).await?;
    let (_, cards) = factory::helpers::create_column_with_cards(db, board.id, 1).await?;
    factory::create_card_member(db, cards[0].id, owner.id).await?;

    let result = CardMemberRepository::new(db)
        .create(cards[0].id, owner.id)
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests looking up an assignment that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_misses_unassigned_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, board) = factory::helpers::create_board_with_owner(db).await?;
    let (_, cards) = factory::helpers::create_column_with_cards(db, board.id, 1).await?;

    let found = CardMemberRepository::new(db)
        .find(cards[0].id, owner.id)
        .await?;

    assert!(found.is_none());

    Ok(())
}
