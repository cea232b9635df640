use super::*;

/// Tests adding a member.
///
/// Verifies that the membership is returned joined with the user's details.
///
/// Expected: Ok with the member listed after the owner
#[tokio::test]
async fn creates_membership_joined_with_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, board) = factory::helpers::create_board_with_owner(db).await?;
    let user = factory::create_user(db).await?;

    let repo = BoardMemberRepository::new(db);
    repo.create(board.id, user.id, Role::Member).await?;

    let member = repo.find(board.id, user.id).await?.unwrap();
    assert_eq!(member.username, user.username);
    assert_eq!(member.role, Role::Member);

    let members = repo.get_by_board(board.id).await?;
    let ids: Vec<i32> = members.iter().map(|member| member.user_id).collect();
    assert_eq!(ids, vec![owner.id, user.id]);

    Ok(())
}

/// Tests adding the same user twice.
///
/// Expected: Err from the unique membership index
#[tokio::test]
async fn rejects_duplicate_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, board) = factory::helpers::create_board_with_owner(db).await?;

    let repo = BoardMemberRepository::new(db);
    let result = repo.create(board.id, owner.id, Role::Member).await;

    assert!(result.is_err());

    Ok(())
}
