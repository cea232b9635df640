//! Card fixtures for creating in-memory test data.
//!
//! Cards carry a denormalized `board_id`; the defaults keep it consistent with the
//! column fixture's default board.

use chrono::{DateTime, Utc};
use entity::card;

/// Default test card name.
pub const DEFAULT_NAME: &str = "Test Card";

/// Default board ID for cards.
pub const DEFAULT_BOARD_ID: i32 = 1;

/// Default column ID for cards.
pub const DEFAULT_COLUMN_ID: i32 = 1;

/// Creates a card entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Card"`
/// - board_id: `1`
/// - column_id: `1`
/// - position: `0`
/// - completed: `false`
pub fn entity() -> card::Model {
    entity_builder().build()
}

/// Creates a card entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let overdue = fixture::card::entity_builder()
///     .due_date(Some(Utc::now() - Duration::days(1)))
///     .build();
/// ```
pub fn entity_builder() -> CardEntityBuilder {
    CardEntityBuilder {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        description: None,
        board_id: DEFAULT_BOARD_ID,
        column_id: DEFAULT_COLUMN_ID,
        due_date: None,
        completed: false,
        completed_at: None,
        position: 0,
    }
}

/// Builder for customized card entity models.
pub struct CardEntityBuilder {
    id: i32,
    name: String,
    description: Option<String>,
    board_id: i32,
    column_id: i32,
    due_date: Option<DateTime<Utc>>,
    completed: bool,
    completed_at: Option<DateTime<Utc>>,
    position: i32,
}

impl CardEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn board_id(mut self, board_id: i32) -> Self {
        self.board_id = board_id;
        self
    }

    pub fn column_id(mut self, column_id: i32) -> Self {
        self.column_id = column_id;
        self
    }

    pub fn due_date(mut self, due_date: Option<DateTime<Utc>>) -> Self {
        self.due_date = due_date;
        self
    }

    /// Marks the card completed, stamping `completed_at` with the current time.
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self.completed_at = completed.then(Utc::now);
        self
    }

    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    pub fn build(self) -> card::Model {
        let now = Utc::now();
        card::Model {
            id: self.id,
            name: self.name,
            description: self.description,
            board_id: self.board_id,
            column_id: self.column_id,
            due_date: self.due_date,
            completed: self.completed,
            completed_at: self.completed_at,
            position: self.position,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_open_card_by_default() {
        let card = entity();

        assert_eq!(card.name, DEFAULT_NAME);
        assert!(!card.completed);
        assert!(card.completed_at.is_none());
    }

    #[test]
    fn completed_card_has_timestamp() {
        let card = entity_builder().completed(true).build();

        assert!(card.completed);
        assert!(card.completed_at.is_some());
    }
}
