use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::tag::TagResponse;
use crate::store::ClothingItem;

/// Body for creating or updating a clothing item. On update the tag list
/// replaces the current one entirely.
#[derive(Deserialize, ToSchema)]
pub struct ClothingItemEditRequest {
    /// Id of one of the caller's categories.
    #[schema(example = 3)]
    pub category_id: i32,
    #[schema(example = "http://x/1.png")]
    pub image_url: String,
    /// Ids of the caller's tags. Omitted means no tags.
    #[serde(default)]
    #[schema(example = json!([10, 11]))]
    pub tag_ids: Vec<i32>,
}

#[derive(Serialize, ToSchema)]
pub struct ClothingItemResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 7)]
    pub user_id: i32,
    #[schema(example = 3)]
    pub category_id: i32,
    #[schema(example = "http://x/1.png")]
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Tags currently attached, ordered by id.
    pub tags: Vec<TagResponse>,
}

impl From<ClothingItem> for ClothingItemResponse {
    fn from(item: ClothingItem) -> Self {
        Self {
            id: item.id,
            user_id: item.user_id,
            category_id: item.category_id,
            image_url: item.image_url,
            created_at: item.created_at,
            updated_at: item.updated_at,
            tags: item.tags.into_iter().map(TagResponse::from).collect(),
        }
    }
}
