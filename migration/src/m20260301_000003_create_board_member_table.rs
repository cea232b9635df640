use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260301_000001_create_user_table::User, m20260301_000002_create_board_table::Board};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BoardMember::Table)
                    .if_not_exists()
                    .col(pk_auto(BoardMember::Id))
                    .col(integer(BoardMember::BoardId))
                    .col(integer(BoardMember::UserId))
                    .col(string(BoardMember::Role).default("member"))
                    .col(
                        timestamp(BoardMember::JoinedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_member_board_id")
                            .from(BoardMember::Table, BoardMember::BoardId)
                            .to(Board::Table, Board::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_member_user_id")
                            .from(BoardMember::Table, BoardMember::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One membership row per (board, user)
        manager
            .create_index(
                Index::create()
                    .name("idx_board_member_unique")
                    .table(BoardMember::Table)
                    .col(BoardMember::BoardId)
                    .col(BoardMember::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_board_member_unique")
                    .table(BoardMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BoardMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BoardMember {
    Table,
    Id,
    BoardId,
    UserId,
    Role,
    JoinedAt,
}
