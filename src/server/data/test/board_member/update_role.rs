use super::*;

/// Tests changing a member's role.
///
/// Expected: Ok(true) and the new role stored
#[tokio::test]
async fn updates_existing_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, board) = factory::helpers::create_board_with_owner(db).await?;
    let user = factory::helpers::create_user_with_role(db, board.id, "member").await?;

    let repo = BoardMemberRepository::new(db);
    let updated = repo.update_role(board.id, user.id, Role::Admin).await?;

    assert!(updated);
    assert_eq!(repo.find_role(board.id, user.id).await?, Some(Role::Admin));

    Ok(())
}

/// Tests changing the role of a non-member.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_non_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, board) = factory::helpers::create_board_with_owner(db).await?;
    let stranger = factory::create_user(db).await?;

    let repo = BoardMemberRepository::new(db);
    let updated = repo.update_role(board.id, stranger.id, Role::Admin).await?;

    assert!(!updated);

    Ok(())
}

/// Tests removing a member.
///
/// Expected: Ok(true) first, Ok(false) once the row is gone
#[tokio::test]
async fn delete_removes_membership_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, board) = factory::helpers::create_board_with_owner(db).await?;
    let user = factory::helpers::create_user_with_role(db, board.id, "member").await?;

    let repo = BoardMemberRepository::new(db);

    assert!(repo.delete(board.id, user.id).await?);
    assert!(!repo.delete(board.id, user.id).await?);
    assert_eq!(repo.find_role(board.id, user.id).await?, None);

    Ok(())
}
