pub mod category;
pub mod clothing_item;
pub mod health;
pub mod tag;
