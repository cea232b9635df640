use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts backed by an in-memory SQLite database.
///
/// Tables are generated from SeaORM entities and created in the order they were added,
/// so referenced tables must be added before the tables pointing at them. Composite
/// unique indexes are not part of the entity definitions; they are added separately
/// and created after every table.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Board, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Board)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed by `build()`.
    tables: Vec<TableCreateStatement>,

    /// CREATE INDEX statements executed after the tables.
    indexes: Vec<IndexCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a builder with no tables.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds the table for `entity` using the SQLite backend.
    ///
    /// Foreign keys declared on the entity's relations are included in the generated
    /// statement, which is why dependency order matters.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index created once every table exists.
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds every table the board domain needs.
    ///
    /// Tables are added in dependency order:
    /// - User
    /// - Board
    /// - BoardMember
    /// - BoardColumn
    /// - Card
    /// - CardMember
    /// - Activity
    ///
    /// The unique `(board_id, user_id)` and `(card_id, user_id)` indexes match the
    /// migrations.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_board_tables(self) -> Self {
        self.with_table(User)
            .with_table(Board)
            .with_table(BoardMember)
            .with_table(BoardColumn)
            .with_table(Card)
            .with_table(CardMember)
            .with_table(Activity)
            .with_index(
                Index::create()
                    .name("idx_board_member_unique")
                    .table(BoardMember)
                    .col(entity::board_member::Column::BoardId)
                    .col(entity::board_member::Column::UserId)
                    .unique()
                    .to_owned(),
            )
            .with_index(
                Index::create()
                    .name("idx_card_member_unique")
                    .table(CardMember)
                    .col(entity::card_member::Column::CardId)
                    .col(entity::card_member::Column::UserId)
                    .unique()
                    .to_owned(),
            )
    }

    /// Connects to a fresh in-memory database and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with the schema in place
    /// - `Err(TestError::Database)` - Connecting or creating a table or index failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;
        context.with_indexes(self.indexes).await?;

        Ok(context)
    }
}
