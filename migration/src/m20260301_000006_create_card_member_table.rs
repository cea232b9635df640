use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260301_000001_create_user_table::User, m20260301_000005_create_card_table::Card};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CardMember::Table)
                    .if_not_exists()
                    .col(pk_auto(CardMember::Id))
                    .col(integer(CardMember::CardId))
                    .col(integer(CardMember::UserId))
                    .col(
                        timestamp(CardMember::AssignedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_member_card_id")
                            .from(CardMember::Table, CardMember::CardId)
                            .to(Card::Table, Card::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_member_user_id")
                            .from(CardMember::Table, CardMember::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One assignment per (card, user)
        manager
            .create_index(
                Index::create()
                    .name("idx_card_member_unique")
                    .table(CardMember::Table)
                    .col(CardMember::CardId)
                    .col(CardMember::UserId)
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
                    .name("idx_card_member_unique")
                    .table(CardMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CardMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CardMember {
    Table,
    Id,
    CardId,
    UserId,
    AssignedAt,
}
