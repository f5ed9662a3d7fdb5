use sea_orm::DatabaseConnection;

use crate::config::AppConfig;
use crate::store::{CategoryStore, ClothingItemStore, TagStore};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub clothes: ClothingItemStore,
    pub categories: CategoryStore,
    pub tags: TagStore,
}

impl AppState {
    /// Build every store on the same pool handle.
    pub fn new(config: AppConfig, db: DatabaseConnection) -> Self {
        Self {
            config,
            clothes: ClothingItemStore::new(db.clone()),
            categories: CategoryStore::new(db.clone()),
            tags: TagStore::new(db),
        }
    }
}
