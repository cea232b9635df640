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
                    .table(Activity::Table)
                    .if_not_exists()
                    .col(pk_auto(Activity::Id))
                    .col(integer(Activity::BoardId))
                    .col(integer_null(Activity::CardId))
                    .col(integer(Activity::UserId))
                    .col(string(Activity::Action))
                    .col(text(Activity::Details).default("{}"))
                    .col(
                        timestamp(Activity::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activity_board_id")
                            .from(Activity::Table, Activity::BoardId)
                            .to(Board::Table, Board::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activity_user_id")
                            .from(Activity::Table, Activity::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_activity_board_id")
                    .table(Activity::Table)
                    .col(Activity::BoardId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_activity_card_id")
                    .table(Activity::Table)
                    .col(Activity::CardId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Activity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Activity {
    Table,
    Id,
    BoardId,
    CardId,
    UserId,
    Action,
    Details,
    CreatedAt,
}
