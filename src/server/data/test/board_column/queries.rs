use super::*;

/// Tests listing a board's columns.
///
/// Verifies that columns come back in position order regardless of insertion order.
///
/// Expected: Ok with columns sorted by position
#[tokio::test]
async fn get_by_board_orders_by_position() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, board) = factory::helpers::create_board_with_owner(db).await?;
    let late = factory::board_column::BoardColumnFactory::new(db, board.id)
        .position(1)
        .build()
        .await?;
    let early = factory::board_column::BoardColumnFactory::new(db, board.id)
        .position(0)
        .build()
        .await?;

    let repo = BoardColumnRepository::new(db);
    let columns = repo.get_by_board(board.id).await?;
    let ids: Vec<i32> = columns.iter().map(|column| column.id).collect();

    assert_eq!(ids, vec![early.id, late.id]);

    Ok(())
}

/// Tests card counts on the column listing.
///
/// Expected: Ok with each column's number of cards
#[tokio::test]
async fn get_with_card_counts_counts_cards_per_column() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, board) = factory::helpers::create_board_with_owner(db).await?;
    factory::helpers::create_column_with_cards(db, board.id, 3).await?;
    factory::helpers::create_column_with_cards(db, board.id, 0).await?;

    let repo = BoardColumnRepository::new(db);
    let columns = repo.get_with_card_counts(board.id).await?;
    let counts: Vec<u64> = columns.iter().map(|entry| entry.card_count).collect();

    assert_eq!(counts, vec![3, 0]);

    Ok(())
}

/// Tests renaming a column.
///
/// Expected: Ok(Some) with the new name, Ok(None) for a missing column
#[tokio::test]
async fn update_name_renames_column() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, board) = factory::helpers::create_board_with_owner(db).await?;
    let column = factory::create_column(db, board.id).await?;

    let repo = BoardColumnRepository::new(db);
    let renamed = repo.update_name(column.id, "Done".to_string()).await?;
    let missing = repo.update_name(999, "Nope".to_string()).await?;

    assert_eq!(renamed.unwrap().name, "Done");
    assert!(missing.is_none());

    Ok(())
}

/// Tests deleting a column.
///
/// Verifies that the column's cards are removed with it.
///
/// Expected: Ok(true) and no cards left in the column
#[tokio::test]
async fn delete_removes_column_cards() -> Result<(), DbErr> {
    use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, board) = factory::helpers::create_board_with_owner(db).await?;
    let (column, _) = factory::helpers::create_column_with_cards(db, board.id, 2).await?;

    let repo = BoardColumnRepository::new(db);
    let deleted = repo.delete(column.id).await?;

    let remaining = entity::prelude::Card::find()
        .filter(entity::card::Column::ColumnId.eq(column.id))
        .count(db)
        .await?;

    assert!(deleted);
    assert_eq!(remaining, 0);

    Ok(())
}
