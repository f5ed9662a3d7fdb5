pub mod category;
pub mod clothing_item;
pub mod tag;
