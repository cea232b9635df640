use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "board")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub owner_id: i32,
    pub visibility: String,
    pub background_color: Option<String>,
    /// JSON array of column ids in display order.
    #[sea_orm(column_type = "Text")]
    pub ordered_column_ids: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::board_member::Entity")]
    BoardMember,
    #[sea_orm(has_many = "super::board_column::Entity")]
    BoardColumn,
    #[sea_orm(has_many = "super::card::Entity")]
    Card,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::board_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BoardMember.def()
    }
}

impl Related<super::board_column::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BoardColumn.def()
    }
}

impl Related<super::card::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Card.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
