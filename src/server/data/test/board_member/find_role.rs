use super::*;

/// Tests resolving a member's stored role.
///
/// Expected: Ok(Some(Role::Observer))
#[tokio::test]
async fn returns_stored_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, board) = factory::helpers::create_board_with_owner(db).await?;
    let observer = factory::helpers::create_user_with_role(db, board.id, "observer").await?;

    let repo = BoardMemberRepository::new(db);
    let role = repo.find_role(board.id, observer.id).await?;

    assert_eq!(role, Some(Role::Observer));

    Ok(())
}

/// Tests resolving the role of a non-member.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_non_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, board) = factory::helpers::create_board_with_owner(db).await?;
    let stranger = factory::create_user(db).await?;

    let repo = BoardMemberRepository::new(db);
    let role = repo.find_role(board.id, stranger.id).await?;

    assert_eq!(role, None);

    Ok(())
}

/// Tests a membership row carrying an unknown role.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_stored_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, board) = factory::helpers::create_board_with_owner(db).await?;
    let user = factory::helpers::create_user_with_role(db, board.id, "superuser").await?;

    let repo = BoardMemberRepository::new(db);
    let result = repo.find_role(board.id, user.id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
