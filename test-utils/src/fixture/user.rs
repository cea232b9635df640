//! User fixtures.

use chrono::Utc;
use entity::user;

/// Default test username.
pub const DEFAULT_USERNAME: &str = "test_user";

/// Default test email address.
pub const DEFAULT_EMAIL: &str = "test_user@example.com";

/// Creates a user entity model with default values.
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a user entity builder for customization.
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder {
        id: 1,
        username: DEFAULT_USERNAME.to_string(),
        email: DEFAULT_EMAIL.to_string(),
        full_name: None,
    }
}

/// Builder for customized user entity models.
pub struct UserEntityBuilder {
    id: i32,
    username: String,
    email: String,
    full_name: Option<String>,
}

impl UserEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn full_name(mut self, full_name: Option<String>) -> Self {
        self.full_name = full_name;
        self
    }

    pub fn build(self) -> user::Model {
        user::Model {
            id: self.id,
            username: self.username,
            email: self.email,
            full_name: self.full_name,
            created_at: Utc::now(),
        }
    }
}
