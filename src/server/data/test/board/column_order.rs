use super::*;

/// Tests replacing the cached column order.
///
/// Expected: Ok with the stored order equal to the given ids
#[tokio::test]
async fn set_column_order_replaces_index() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, board) = factory::helpers::create_board_with_owner(db).await?;
    let first = factory::create_column(db, board.id).await?;
    let second = factory::create_column(db, board.id).await?;

    let repo = BoardRepository::new(db);
    repo.set_column_order(board.id, &[second.id, first.id]).await?;

    let board = repo.find_by_id(board.id).await?.unwrap();
    assert_eq!(board.ordered_column_ids, vec![second.id, first.id]);

    Ok(())
}

/// Tests appending to the cached column order.
///
/// Verifies that pushing an id already present moves it to the end.
///
/// Expected: Ok with the id appended exactly once
#[tokio::test]
async fn push_column_id_appends_without_duplicates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, board) = factory::helpers::create_board_with_owner(db).await?;
    let first = factory::create_column(db, board.id).await?;
    let second = factory::create_column(db, board.id).await?;

    let repo = BoardRepository::new(db);
    repo.push_column_id(board.id, first.id).await?;

    let board = repo.find_by_id(board.id).await?.unwrap();
    assert_eq!(board.ordered_column_ids, vec![second.id, first.id]);

    Ok(())
}

/// Tests writing the column order of a missing board.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn set_column_order_fails_for_missing_board() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BoardRepository::new(db);
    let result = repo.set_column_order(404, &[1]).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
