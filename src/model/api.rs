use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Full ordering of a container's children, first to last.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReorderDto {
    pub ordered_ids: Vec<i32>,
}
