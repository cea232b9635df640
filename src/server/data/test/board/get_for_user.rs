use super::*;

/// Tests listing boards for a user.
///
/// Verifies that both owned boards and boards joined through a membership row are
/// returned, and boards the user has no relation to are not.
///
/// Expected: Ok with owned and joined boards only
#[tokio::test]
async fn returns_owned_and_joined_boards() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, owned) = factory::helpers::create_board_with_owner(db).await?;
    let (_, joined) = factory::helpers::create_board_with_owner(db).await?;
    let (_, unrelated) = factory::helpers::create_board_with_owner(db).await?;
    factory::create_member(db, joined.id, user.id, "observer").await?;

    let repo = BoardRepository::new(db);
    let boards = repo.get_for_user(user.id).await?;
    let ids: Vec<i32> = boards.iter().map(|board| board.id).collect();

    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&owned.id));
    assert!(ids.contains(&joined.id));
    assert!(!ids.contains(&unrelated.id));

    Ok(())
}

/// Tests listing boards for a user without any.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_user_without_boards() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_board_with_owner(db).await?;
    let loner = factory::create_user(db).await?;

    let repo = BoardRepository::new(db);
    let boards = repo.get_for_user(loner.id).await?;

    assert!(boards.is_empty());

    Ok(())
}

/// Tests the ownership check.
///
/// Verifies that the owner is recognised even though members are not.
///
/// Expected: Ok(true) for the owner, Ok(false) for a member
#[tokio::test]
async fn is_owner_only_matches_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, board) = factory::helpers::create_board_with_owner(db).await?;
    let admin = factory::helpers::create_user_with_role(db, board.id, "admin").await?;

    let repo = BoardRepository::new(db);

    assert!(repo.is_owner(board.id, owner.id).await?);
    assert!(!repo.is_owner(board.id, admin.id).await?);

    Ok(())
}
