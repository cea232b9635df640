//! Position ordering engine.
//!
//! Applies the plans from `model::position` to the store. A container is either the
//! columns of a board or the cards of a column. Every write leaves the container dense
//! (`0..n-1`), and renumbering a board's columns also rewrites the board's cached column
//! order. The engine never opens a transaction itself; callers pass one in so a whole
//! move or reorder commits or rolls back together. No version is checked, so when two
//! reorders of the same container race the last one to commit wins.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::{board::BoardRepository, board_column::BoardColumnRepository, card::CardRepository},
    error::AppError,
    model::position::{
        append_position, plan_compact, plan_insert, plan_reorder, Renumbering, Sibling,
    },
};

/// An ordered set of siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    /// Columns of the board with this id.
    BoardColumns(i32),
    /// Cards of the column with this id.
    ColumnCards(i32),
}

pub struct PositionEngine<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PositionEngine<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Position for a new entity at the end of `container`.
    pub async fn append(&self, container: Container) -> Result<i32, AppError> {
        let max = match container {
            Container::BoardColumns(board_id) => {
                BoardColumnRepository::new(self.db)
                    .max_position(board_id)
                    .await?
            }
            Container::ColumnCards(column_id) => {
                CardRepository::new(self.db).max_position(column_id).await?
            }
        };

        Ok(append_position(max))
    }

    /// Places `id` at `index` in `container` and renumbers its siblings.
    ///
    /// `id` must already belong to the container. Out-of-range indexes are clamped.
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - The container's ids in their new order
    pub async fn insert_at(
        &self,
        container: Container,
        id: i32,
        index: i32,
    ) -> Result<Vec<i32>, AppError> {
        let siblings = self.siblings(container).await?;
        let plan = plan_insert(&siblings, id, index);

        self.apply(container, plan).await
    }

    /// Renumbers `container` to follow `ordered_ids` exactly.
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - The applied order
    /// - `Err(AppError::BoardErr)` - `ordered_ids` is not a permutation of the container
    pub async fn reorder(
        &self,
        container: Container,
        ordered_ids: &[i32],
    ) -> Result<Vec<i32>, AppError> {
        let siblings = self.siblings(container).await?;
        let plan = plan_reorder(&siblings, ordered_ids)?;

        self.apply(container, plan).await
    }

    /// Closes gaps left in `container` after a removal.
    pub async fn compact(&self, container: Container) -> Result<Vec<i32>, AppError> {
        let siblings = self.siblings(container).await?;
        let plan = plan_compact(&siblings);

        self.apply(container, plan).await
    }

    async fn siblings(&self, container: Container) -> Result<Vec<Sibling>, AppError> {
        let siblings = match container {
            Container::BoardColumns(board_id) => {
                BoardColumnRepository::new(self.db).positions(board_id).await?
            }
            Container::ColumnCards(column_id) => {
                CardRepository::new(self.db).positions(column_id).await?
            }
        };

        Ok(siblings)
    }

    async fn apply(&self, container: Container, plan: Renumbering) -> Result<Vec<i32>, AppError> {
        match container {
            Container::BoardColumns(board_id) => {
                let repo = BoardColumnRepository::new(self.db);
                for (id, position) in &plan.changes {
                    repo.set_position(*id, *position).await?;
                }

                BoardRepository::new(self.db)
                    .set_column_order(board_id, &plan.order)
                    .await?;
            }
            Container::ColumnCards(_) => {
                let repo = CardRepository::new(self.db);
                for (id, position) in &plan.changes {
                    repo.set_position(*id, *position).await?;
                }
            }
        }

        tracing::debug!(
            "Renumbered {:?}: {} of {} positions changed",
            container,
            plan.changes.len(),
            plan.order.len()
        );

        Ok(plan.order)
    }
}
