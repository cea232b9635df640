//! Column fixtures for creating in-memory test data.

use chrono::Utc;
use entity::board_column;

/// Default test column name.
pub const DEFAULT_NAME: &str = "Test Column";

/// Default board ID for columns.
pub const DEFAULT_BOARD_ID: i32 = 1;

/// Default column position.
pub const DEFAULT_POSITION: i32 = 0;

/// Creates a column entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Column"`
/// - board_id: `1`
/// - position: `0`
pub fn entity() -> board_column::Model {
    entity_builder().build()
}

/// Creates a column entity builder for customization.
pub fn entity_builder() -> BoardColumnEntityBuilder {
    BoardColumnEntityBuilder {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        board_id: DEFAULT_BOARD_ID,
        position: DEFAULT_POSITION,
    }
}

/// Builder for customized column entity models.
pub struct BoardColumnEntityBuilder {
    id: i32,
    name: String,
    board_id: i32,
    position: i32,
}

impl BoardColumnEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn board_id(mut self, board_id: i32) -> Self {
        self.board_id = board_id;
        self
    }

    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    pub fn build(self) -> board_column::Model {
        let now = Utc::now();
        board_column::Model {
            id: self.id,
            name: self.name,
            board_id: self.board_id,
            position: self.position,
            created_at: now,
            updated_at: now,
        }
    }
}
