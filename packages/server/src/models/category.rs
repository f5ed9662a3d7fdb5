use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::category;

/// Body for creating or renaming a category.
#[derive(Deserialize, ToSchema)]
pub struct CategoryEditRequest {
    /// Category name, 1-100 characters after trimming.
    #[schema(example = "Shirts")]
    pub name: String,
}

#[derive(Serialize, ToSchema)]
pub struct CategoryResponse {
    #[schema(example = 3)]
    pub id: i32,
    #[schema(example = 7)]
    pub user_id: i32,
    #[schema(example = "Shirts")]
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<category::Model> for CategoryResponse {
    fn from(m: category::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            name: m.name,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
