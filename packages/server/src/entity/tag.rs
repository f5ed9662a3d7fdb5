use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Free-form label, owned by one user.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(indexed)]
    pub user_id: i32,
    pub name: String,

    #[sea_orm(has_many, via = "clothing_item_tag")]
    pub clothing_items: HasMany<super::clothing_item::Entity>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
