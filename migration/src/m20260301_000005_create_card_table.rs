use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000002_create_board_table::Board,
    m20260301_000004_create_board_column_table::BoardColumn,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Card::Table)
                    .if_not_exists()
                    .col(pk_auto(Card::Id))
                    .col(string(Card::Name))
                    .col(text_null(Card::Description))
                    .col(integer(Card::BoardId))
                    .col(integer(Card::ColumnId))
                    .col(timestamp_null(Card::DueDate))
                    .col(boolean(Card::Completed).default(false))
                    .col(timestamp_null(Card::CompletedAt))
                    .col(integer(Card::Position).default(0))
                    .col(
                        timestamp(Card::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Card::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_board_id")
                            .from(Card::Table, Card::BoardId)
                            .to(Board::Table, Board::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_column_id")
                            .from(Card::Table, Card::ColumnId)
                            .to(BoardColumn::Table, BoardColumn::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_card_column_position")
                    .table(Card::Table)
                    .col(Card::ColumnId)
                    .col(Card::Position)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_card_column_position")
                    .table(Card::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Card::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Card {
    Table,
    Id,
    Name,
    Description,
    BoardId,
    ColumnId,
    DueDate,
    Completed,
    CompletedAt,
    Position,
    CreatedAt,
    UpdatedAt,
}
