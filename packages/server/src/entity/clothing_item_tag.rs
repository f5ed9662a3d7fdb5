use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Join row between a clothing item and a tag. The composite key keeps each
/// pair unique.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clothing_item_tags")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub clothing_item_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub tag_id: i32,
    #[sea_orm(belongs_to, from = "clothing_item_id", to = "id")]
    pub clothing_item: HasOne<super::clothing_item::Entity>,
    #[sea_orm(belongs_to, from = "tag_id", to = "id")]
    pub tag: HasOne<super::tag::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
