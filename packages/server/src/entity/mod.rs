pub mod category;
pub mod clothing_item;
pub mod clothing_item_tag;
pub mod tag;
