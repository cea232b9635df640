use super::*;

/// Tests completing a card through a field update.
///
/// Expected: Ok(Some) with `completed_at` stamped
#[tokio::test]
async fn completing_stamps_completed_at() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, board) = factory::helpers::create_board_with_owner(db).await?;
    let column = factory::create_column(db, board.id).await?;
    let card = factory::create_card(db, &column).await?;

    let repo = CardRepository::new(db);
    let updated = repo
        .update(&UpdateCardParams {
            id: card.id,
            name: Some("Renamed".to_string()),
            completed: Some(true),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert!(updated.completed);
    assert!(updated.completed_at.is_some());

    Ok(())
}

/// Tests reopening a completed card.
///
/// Expected: Ok(Some) with `completed_at` cleared
#[tokio::test]
async fn set_completed_false_clears_stamp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, board) = factory::helpers::create_board_with_owner(db).await?;
    let column = factory::create_column(db, board.id).await?;
    let card = factory::card::CardFactory::new(db, &column)
        .completed(true)
        .build()
        .await?;

    let repo = CardRepository::new(db);
    let reopened = repo.set_completed(card.id, false).await?.unwrap();

    assert!(!reopened.completed);
    assert!(reopened.completed_at.is_none());

    Ok(())
}

/// Tests updating a card that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_card() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CardRepository::new(db);
    let updated = repo
        .update(&UpdateCardParams {
            id: 404,
            ..Default::default()
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
