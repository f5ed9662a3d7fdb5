use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::tag;

/// Body for creating or renaming a tag.
#[derive(Deserialize, ToSchema)]
pub struct TagEditRequest {
    /// Tag name, 1-100 characters after trimming.
    #[schema(example = "summer")]
    pub name: String,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct TagResponse {
    #[schema(example = 10)]
    pub id: i32,
    #[schema(example = 7)]
    pub user_id: i32,
    #[schema(example = "summer")]
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<tag::Model> for TagResponse {
    fn from(m: tag::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            name: m.name,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
