//! Board fixtures for creating in-memory test data.
//!
//! Provides board entity models without database insertion. Used directly in unit tests
//! and as the defaults behind `factory::board::BoardFactory`.

use chrono::Utc;
use entity::board;

/// Default test board name.
pub const DEFAULT_NAME: &str = "Test Board";

/// Default owner ID for boards.
pub const DEFAULT_OWNER_ID: i32 = 1;

/// Default board visibility.
pub const DEFAULT_VISIBILITY: &str = "private";

/// Ordered column index of a board without columns.
pub const EMPTY_COLUMN_INDEX: &str = "[]";

/// Creates a board entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Board"`
/// - owner_id: `1`
/// - visibility: `"private"`
/// - ordered_column_ids: `"[]"`
///
/// # Returns
/// - `board::Model` - In-memory board entity
pub fn entity() -> board::Model {
    entity_builder().build()
}

/// Creates a board entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let board = fixture::board::entity_builder()
///     .owner_id(7)
///     .ordered_column_ids(&[3, 1, 2])
///     .build();
/// ```
pub fn entity_builder() -> BoardEntityBuilder {
    BoardEntityBuilder::default()
}

/// Builder for customized board entity models.
pub struct BoardEntityBuilder {
    id: i32,
    name: String,
    description: Option<String>,
    owner_id: i32,
    visibility: String,
    background_color: Option<String>,
    ordered_column_ids: String,
}

impl Default for BoardEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            description: None,
            owner_id: DEFAULT_OWNER_ID,
            visibility: DEFAULT_VISIBILITY.to_string(),
            background_color: None,
            ordered_column_ids: EMPTY_COLUMN_INDEX.to_string(),
        }
    }
}

impl BoardEntityBuilder {
    /// Sets the board ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the board name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the board description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the owning user.
    pub fn owner_id(mut self, owner_id: i32) -> Self {
        self.owner_id = owner_id;
        self
    }

    /// Sets the stored visibility string.
    pub fn visibility(mut self, visibility: impl Into<String>) -> Self {
        self.visibility = visibility.into();
        self
    }

    /// Sets the background color.
    pub fn background_color(mut self, color: Option<String>) -> Self {
        self.background_color = color;
        self
    }

    /// Sets the ordered column index from a list of ids.
    pub fn ordered_column_ids(mut self, ids: &[i32]) -> Self {
        self.ordered_column_ids =
            serde_json::to_string(ids).unwrap_or_else(|_| EMPTY_COLUMN_INDEX.to_string());
        self
    }

    /// Sets the raw ordered column index text.
    pub fn raw_column_index(mut self, raw: impl Into<String>) -> Self {
        self.ordered_column_ids = raw.into();
        self
    }

    /// Builds the board entity model.
    pub fn build(self) -> board::Model {
        let now = Utc::now();
        board::Model {
            id: self.id,
            name: self.name,
            description: self.description,
            owner_id: self.owner_id,
            visibility: self.visibility,
            background_color: self.background_color,
            ordered_column_ids: self.ordered_column_ids,
            created_at: now,
            updated_at: now,
        }
    }
}
