use super::*;

/// Tests the order of a board's feed.
///
/// Expected: Ok with the latest entry first
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, board) = factory::helpers::create_board_with_owner(db).await?;

    let repo = ActivityRepository::new(db);
    for action in [
        ActivityAction::ColumnCreated,
        ActivityAction::ColumnUpdated,
        ActivityAction::ColumnsReordered,
    ] {
        repo.record(NewActivity::board(board.id, owner.id, action, json!({})))
            .await?;
    }

    let entries = repo
        .get_by_board(board.id, &ActivityFilter::default())
        .await?;
    let actions: Vec<ActivityAction> = entries.iter().map(|e| e.action).collect();

    assert_eq!(
        actions,
        vec![
            ActivityAction::ColumnsReordered,
            ActivityAction::ColumnUpdated,
            ActivityAction::ColumnCreated,
        ]
    );

    Ok(())
}

/// Tests filtering a board's feed by action, user and card.
///
/// Expected: Ok with only the matching entries
#[tokio::test]
async fn filters_by_action_user_and_card() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, board) = factory::helpers::create_board_with_owner(db).await?;
    let member = factory::helpers::create_user_with_role(db, board.id, "member").await?;
    let (_, cards) = factory::helpers::create_column_with_cards(db, board.id, 2).await?;

    let repo = ActivityRepository::new(db);
    repo.record(NewActivity::card(
        board.id,
        cards[0].id,
        owner.id,
        ActivityAction::CardMoved,
        json!({}),
    ))
    .await?;
    repo.record(NewActivity::card(
        board.id,
        cards[1].id,
        member.id,
        ActivityAction::CardMoved,
        json!({}),
    ))
    .await?;
    repo.record(NewActivity::board(
        board.id,
        member.id,
        ActivityAction::CardsReordered,
        json!({}),
    ))
    .await?;

    let moves = repo
        .get_by_board(
            board.id,
            &ActivityFilter {
                action: Some(ActivityAction::CardMoved),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(moves.len(), 2);

    let by_member = repo
        .get_by_board(
            board.id,
            &ActivityFilter {
                user_id: Some(member.id),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(by_member.len(), 2);

    let on_card = repo
        .get_by_board(
            board.id,
            &ActivityFilter {
                card_id: Some(cards[0].id),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(on_card.len(), 1);
    assert_eq!(on_card[0].user_id, owner.id);

    Ok(())
}

/// Tests paging through a board's feed.
///
/// Expected: Ok with the second page holding the remaining entry
#[tokio::test]
async fn pages_with_limit_and_offset() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, board) = factory::helpers::create_board_with_owner(db).await?;

    let repo = ActivityRepository::new(db);
    for _ in 0..3 {
        repo.record(NewActivity::board(
            board.id,
            owner.id,
            ActivityAction::ColumnCreated,
            json!({}),
        ))
        .await?;
    }

    let page = |offset| ActivityFilter {
        page: Page {
            limit: Some(2),
            offset: Some(offset),
        },
        ..Default::default()
    };

    assert_eq!(repo.get_by_board(board.id, &page(0)).await?.len(), 2);
    assert_eq!(repo.get_by_board(board.id, &page(2)).await?.len(), 1);
    assert_eq!(repo.count_by_board(board.id).await?, 3);

    Ok(())
}
