use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "card")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// Mirrors the owning column's board.
    pub board_id: i32,
    pub column_id: i32,
    pub due_date: Option<DateTimeUtc>,
    pub completed: bool,
    pub completed_at: Option<DateTimeUtc>,
    pub position: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::board::Entity",
        from = "Column::BoardId",
        to = "super::board::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Board,
    #[sea_orm(
        belongs_to = "super::board_column::Entity",
        from = "Column::ColumnId",
        to = "super::board_column::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    BoardColumn,
}

impl Related<super::board::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Board.def()
    }
}

impl Related<super::board_column::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BoardColumn.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
