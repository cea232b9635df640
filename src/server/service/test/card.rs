use crate::server::{
    data::{activity::ActivityRepository, card::CardRepository},
    error::{auth::AuthError, board::BoardError, AppError},
    model::card::{CreateCardParams, DuplicateCardParams, MoveCardParams, UpdateCardParams},
    service::card::CardService,
};
use sea_orm::{ConnectionTrait, DbErr};
use test_utils::{builder::TestBuilder, factory};

async fn placement(
    db: &sea_orm::DatabaseConnection,
    column_id: i32,
) -> Result<Vec<(i32, i32)>, DbErr> {
    let cards = CardRepository::new(db).get_by_column(column_id).await?;

    Ok(cards.iter().map(|card| (card.id, card.position)).collect())
}

/// Tests moving a card into another column at an index.
///
/// Verifies that the card lands at position 2 of the target column, the card it displaced
/// moves down, and the source column is renumbered 0, 1.
///
/// Expected: Ok with both columns dense
#[tokio::test]
async fn move_card_between_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, board) = factory::helpers::create_board_with_owner(db).await?;
    let (source, s) = factory::helpers::create_column_with_cards(db, board.id, 3).await?;
    let (target, t) = factory::helpers::create_column_with_cards(db, board.id, 3).await?;

    let moved = CardService::new(db)
        .move_card(
            owner.id,
            MoveCardParams {
                id: s[1].id,
                target_column_id: target.id,
                position: Some(2),
            },
        )
        .await
        .unwrap();

    assert_eq!(moved.column_id, target.id);
    assert_eq!(moved.position, 2);
    assert_eq!(moved.board_id, board.id);

    assert_eq!(placement(db, source.id).await?, vec![(s[0].id, 0), (s[2].id, 1)]);
    assert_eq!(
        placement(db, target.id).await?,
        vec![(t[0].id, 0), (t[1].id, 1), (s[1].id, 2), (t[2].id, 3)]
    );

    Ok(())
}

/// Tests moving a card within its own column.
///
/// Expected: Ok with the column renumbered around the card
#[tokio::test]
async fn move_card_within_column() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, board) = factory::helpers::create_board_with_owner(db).await?;
    let (column, c) = factory::helpers::create_column_with_cards(db, board.id, 3).await?;

    CardService::new(db)
        .move_card(
            owner.id,
            MoveCardParams {
                id: c[2].id,
                target_column_id: column.id,
                position: Some(0),
            },
        )
        .await
        .unwrap();

    assert_eq!(
        placement(db, column.id).await?,
        vec![(c[2].id, 0), (c[0].id, 1), (c[1].id, 2)]
    );

    Ok(())
}

/// Tests moving a card to a column on another board.
///
/// Expected: Err(BoardError::CrossBoardCardMove) and the card untouched
#[tokio::test]
async fn move_card_across_boards_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, board) = factory::helpers::create_board_with_owner(db).await?;
    let other = factory::create_board(db, owner.id).await?;
    let (column, cards) = factory::helpers::create_column_with_cards(db, board.id, 1).await?;
    let foreign = factory::create_column(db, other.id).await?;

    let result = CardService::new(db)
        .move_card(
            owner.id,
            MoveCardParams {
                id: cards[0].id,
                target_column_id: foreign.id,
                position: None,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::BoardErr(BoardError::CrossBoardCardMove))
    ));

    let card = CardRepository::new(db).find_by_id(cards[0].id).await?.unwrap();
    assert_eq!(card.board_id, board.id);
    assert_eq!(card.column_id, column.id);

    Ok(())
}

/// Tests moving a card to a column that does not exist.
///
/// Expected: Err(BoardError::TargetColumnNotFound)
#[tokio::test]
async fn move_card_to_missing_column() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, board) = factory::helpers::create_board_with_owner(db).await?;
    let (_, cards) = factory::helpers::create_column_with_cards(db, board.id, 1).await?;

    let result = CardService::new(db)
        .move_card(
            owner.id,
            MoveCardParams {
                id: cards[0].id,
                target_column_id: 404,
                position: None,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::BoardErr(BoardError::TargetColumnNotFound(404)))
    ));

    Ok(())
}

/// Tests an observer moving a card.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn observer_cannot_move_card() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, board) = factory::helpers::create_board_with_owner(db).await?;
    let observer = factory::helpers::create_user_with_role(db, board.id, "observer").await?;
    let (column, cards) = factory::helpers::create_column_with_cards(db, board.id, 2).await?;

    let result = CardService::new(db)
        .move_card(
            observer.id,
            MoveCardParams {
                id: cards[1].id,
                target_column_id: column.id,
                position: Some(0),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert_eq!(
        placement(db, column.id).await?,
        vec![(cards[0].id, 0), (cards[1].id, 1)]
    );

    Ok(())
}

/// Tests creating a card at an index.
///
/// Expected: Ok with the card first and the existing card shifted down
#[tokio::test]
async fn create_inserts_at_position() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, board) = factory::helpers::create_board_with_owner(db).await?;
    let (column, existing) = factory::helpers::create_column_with_cards(db, board.id, 1).await?;

    let card = CardService::new(db)
        .create(
            owner.id,
            CreateCardParams {
                column_id: column.id,
                name: "Hotfix".to_string(),
                description: None,
                due_date: None,
                position: Some(0),
            },
        )
        .await
        .unwrap();

    assert_eq!(card.board_id, board.id);
    assert_eq!(
        placement(db, column.id).await?,
        vec![(card.id, 0), (existing[0].id, 1)]
    );

    Ok(())
}

/// Tests an update carrying a new column.
///
/// Verifies that field changes and the relocation are applied together.
///
/// Expected: Ok with the card renamed and appended to the target column
#[tokio::test]
async fn update_with_column_moves_card() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, board) = factory::helpers::create_board_with_owner(db).await?;
    let (source, cards) = factory::helpers::create_column_with_cards(db, board.id, 2).await?;
    let (target, _) = factory::helpers::create_column_with_cards(db, board.id, 1).await?;

    let updated = CardService::new(db)
        .update(
            owner.id,
            UpdateCardParams {
                id: cards[0].id,
                name: Some("Moved".to_string()),
                column_id: Some(target.id),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Moved");
    assert_eq!(updated.column_id, target.id);
    assert_eq!(updated.position, 1);
    assert_eq!(placement(db, source.id).await?, vec![(cards[1].id, 0)]);

    Ok(())
}

/// Tests deleting a card.
///
/// Expected: Ok with the remaining cards renumbered
#[tokio::test]
async fn delete_compacts_column() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, board) = factory::helpers::create_board_with_owner(db).await?;
    let (column, cards) = factory::helpers::create_column_with_cards(db, board.id, 3).await?;

    CardService::new(db).delete(owner.id, cards[0].id).await.unwrap();

    assert_eq!(
        placement(db, column.id).await?,
        vec![(cards[1].id, 0), (cards[2].id, 1)]
    );

    Ok(())
}

/// Tests a member deleting a card.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn member_cannot_delete_card() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, board) = factory::helpers::create_board_with_owner(db).await?;
    let member = factory::helpers::create_user_with_role(db, board.id, "member").await?;
    let (_, cards) = factory::helpers::create_column_with_cards(db, board.id, 1).await?;

    let result = CardService::new(db).delete(member.id, cards[0].id).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests reordering a column's cards.
///
/// Expected: Ok with cards in the requested order
#[tokio::test]
async fn reorder_follows_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, board) = factory::helpers::create_board_with_owner(db).await?;
    let (column, c) = factory::helpers::create_column_with_cards(db, board.id, 3).await?;

    let cards = CardService::new(db)
        .reorder(owner.id, column.id, &[c[1].id, c[2].id, c[0].id])
        .await
        .unwrap();
    let ids: Vec<i32> = cards.iter().map(|card| card.id).collect();

    assert_eq!(ids, vec![c[1].id, c[2].id, c[0].id]);

    Ok(())
}

/// Tests duplicating a completed card.
///
/// Expected: Ok with a "(Copy)" card at the end of the column and completion reset
#[tokio::test]
async fn duplicate_resets_completion() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, board) = factory::helpers::create_board_with_owner(db).await?;
    let column = factory::create_column(db, board.id).await?;
    let original = factory::card::CardFactory::new(db, &column)
        .name("Ship it")
        .completed(true)
        .build()
        .await?;

    let copy = CardService::new(db)
        .duplicate(
            owner.id,
            DuplicateCardParams {
                id: original.id,
                target_column_id: None,
                name: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(copy.name, "Ship it (Copy)");
    assert_eq!(copy.column_id, column.id);
    assert_eq!(copy.position, 1);
    assert!(!copy.completed);
    assert!(copy.completed_at.is_none());

    Ok(())
}

/// Tests duplicating a card into another board's column.
///
/// Expected: Err(BoardError::CrossBoardCardMove)
#[tokio::test]
async fn duplicate_to_other_board_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, board) = factory::helpers::create_board_with_owner(db).await?;
    let other = factory::create_board(db, owner.id).await?;
    let (_, cards) = factory::helpers::create_column_with_cards(db, board.id, 1).await?;
    let foreign = factory::create_column(db, other.id).await?;

    let result = CardService::new(db)
        .duplicate(
            owner.id,
            DuplicateCardParams {
                id: cards[0].id,
                target_column_id: Some(foreign.id),
                name: None,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::BoardErr(BoardError::CrossBoardCardMove))
    ));

    Ok(())
}

/// Tests archiving and unarchiving a card.
///
/// Expected: Ok with `completed_at` stamped, then cleared
#[tokio::test]
async fn archive_toggles_completion() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, board) = factory::helpers::create_board_with_owner(db).await?;
    let (_, cards) = factory::helpers::create_column_with_cards(db, board.id, 1).await?;

    let service = CardService::new(db);
    let archived = service.archive(owner.id, cards[0].id, true).await.unwrap();
    assert!(archived.completed);
    assert!(archived.completed_at.is_some());

    let restored = service.archive(owner.id, cards[0].id, false).await.unwrap();
    assert!(!restored.completed);
    assert!(restored.completed_at.is_none());

    Ok(())
}

/// Tests moving a card into another column without a position.
///
/// Verifies that the card is appended after the target's cards and the source column is
/// renumbered to close the gap.
///
/// Expected: Ok with the card at position 2 of the target and the source at 0, 1
#[tokio::test]
async fn move_card_without_position_appends() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, board) = factory::helpers::create_board_with_owner(db).await?;
    let (source, s) = factory::helpers::create_column_with_cards(db, board.id, 3).await?;
    let (target, t) = factory::helpers::create_column_with_cards(db, board.id, 2).await?;

    let moved = CardService::new(db)
        .move_card(
            owner.id,
            MoveCardParams {
                id: s[0].id,
                target_column_id: target.id,
                position: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(moved.column_id, target.id);
    assert_eq!(moved.position, 2);

    assert_eq!(placement(db, source.id).await?, vec![(s[1].id, 0), (s[2].id, 1)]);
    assert_eq!(
        placement(db, target.id).await?,
        vec![(t[0].id, 0), (t[1].id, 1), (s[0].id, 2)]
    );

    Ok(())
}

/// Tests a move whose final step fails after the card was already written to its target.
///
/// A trigger aborts the compaction of the source column, which runs after the card has
/// been reassigned. Verifies that the reassignment is rolled back with it.
///
/// Expected: Err with both columns and the activity log as they were
#[tokio::test]
async fn failed_move_rolls_back_card_reassignment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, board) = factory::helpers::create_board_with_owner(db).await?;
    let (source, s) = factory::helpers::create_column_with_cards(db, board.id, 3).await?;
    let (target, t) = factory::helpers::create_column_with_cards(db, board.id, 1).await?;

    db.execute_unprepared(&format!(
        "CREATE TRIGGER fail_source_compaction BEFORE UPDATE OF position ON card \
         WHEN OLD.column_id = {0} AND NEW.column_id = {0} \
         BEGIN SELECT RAISE(ABORT, 'compaction failed'); END",
        source.id
    ))
    .await?;

    let result = CardService::new(db)
        .move_card(
            owner.id,
            MoveCardParams {
                id: s[0].id,
                target_column_id: target.id,
                position: None,
            },
        )
        .await;

    assert!(result.is_err());

    assert_eq!(
        placement(db, source.id).await?,
        vec![(s[0].id, 0), (s[1].id, 1), (s[2].id, 2)]
    );
    assert_eq!(placement(db, target.id).await?, vec![(t[0].id, 0)]);
    assert_eq!(
        ActivityRepository::new(db).count_by_board(board.id).await?,
        0
    );

    Ok(())
}
