use super::*;
use crate::server::model::position::Sibling;

/// Tests reading sibling positions of a board's columns.
///
/// Expected: Ok with `(id, position)` pairs in position order
#[tokio::test]
async fn positions_lists_siblings_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, board) = factory::helpers::create_board_with_owner(db).await?;
    let first = factory::create_column(db, board.id).await?;
    let second = factory::create_column(db, board.id).await?;

    let repo = BoardColumnRepository::new(db);
    let siblings = repo.positions(board.id).await?;

    assert_eq!(
        siblings,
        vec![Sibling::new(first.id, 0), Sibling::new(second.id, 1)]
    );

    Ok(())
}

/// Tests the highest position lookup.
///
/// Expected: Ok(None) for an empty board and the last position otherwise
#[tokio::test]
async fn max_position_tracks_last_column() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, board) = factory::helpers::create_board_with_owner(db).await?;

    let repo = BoardColumnRepository::new(db);
    assert_eq!(repo.max_position(board.id).await?, None);

    factory::board_column::BoardColumnFactory::new(db, board.id)
        .position(4)
        .build()
        .await?;
    assert_eq!(repo.max_position(board.id).await?, Some(4));

    Ok(())
}

/// Tests moving a column to another board.
///
/// Expected: Ok with the column's board and position rewritten
#[tokio::test]
async fn set_board_reassigns_column() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, source) = factory::helpers::create_board_with_owner(db).await?;
    let (_, target) = factory::helpers::create_board_with_owner(db).await?;
    let column = factory::create_column(db, source.id).await?;

    let repo = BoardColumnRepository::new(db);
    repo.set_board(column.id, target.id, 3).await?;

    let moved = repo.find_by_id(column.id).await?.unwrap();
    assert_eq!(moved.board_id, target.id);
    assert_eq!(moved.position, 3);

    Ok(())
}
