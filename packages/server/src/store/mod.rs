//! Persistence layer for the wardrobe catalog.
//!
//! Each store owns the CRUD and transactional logic for one entity type and is
//! built from an explicitly passed [`DatabaseConnection`] pool handle. Stores
//! return plain records or a classified [`StoreError`]; mapping to HTTP lives
//! in [`crate::error`].

pub mod category;
pub mod clothing_item;
pub mod tag;
pub mod tag_association;

use std::collections::HashSet;

use sea_orm::DbErr;

pub use category::CategoryStore;
pub use clothing_item::{ClothingItem, ClothingItemStore};
pub use tag::TagStore;

/// Longest accepted category or tag name, in characters.
pub const MAX_NAME_CHARS: usize = 100;

/// Longest accepted image URL, in characters.
pub const MAX_IMAGE_URL_CHARS: usize = 2048;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A required field is missing, empty, or out of range.
    #[error("{0}")]
    Validation(String),
    /// No row matched both the id and the owning user.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// The row exists but the change would break a referential rule.
    #[error("{0}")]
    Conflict(String),
    /// The pool could not hand out a connection.
    #[error("database connection failed: {0}")]
    Connection(#[source] DbErr),
    /// The statement itself failed (constraint violation, bad SQL, I/O).
    #[error("query failed: {0}")]
    Query(#[source] DbErr),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => StoreError::Connection(err),
            other => StoreError::Query(other),
        }
    }
}

/// Reject non-positive ids before they reach the database.
pub(crate) fn require_id(id: i32, field: &str) -> StoreResult<()> {
    if id <= 0 {
        return Err(StoreError::Validation(format!(
            "{field} must be a positive integer"
        )));
    }
    Ok(())
}

/// Trim a category or tag name and check it is 1..=MAX_NAME_CHARS characters.
pub(crate) fn normalize_name(name: &str) -> StoreResult<String> {
    let name = name.trim();
    if name.is_empty() || name.chars().count() > MAX_NAME_CHARS {
        return Err(StoreError::Validation(format!(
            "name must be 1-{MAX_NAME_CHARS} characters"
        )));
    }
    Ok(name.to_string())
}

pub(crate) fn normalize_image_url(image_url: &str) -> StoreResult<String> {
    let image_url = image_url.trim();
    if image_url.is_empty() {
        return Err(StoreError::Validation("image_url is required".into()));
    }
    if image_url.chars().count() > MAX_IMAGE_URL_CHARS {
        return Err(StoreError::Validation(format!(
            "image_url must be at most {MAX_IMAGE_URL_CHARS} characters"
        )));
    }
    Ok(image_url.to_string())
}

/// Validate tag ids and drop repeats, keeping first-seen order.
pub(crate) fn unique_tag_ids(tag_ids: &[i32]) -> StoreResult<Vec<i32>> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(tag_ids.len());
    for &id in tag_ids {
        require_id(id, "tag_id")?;
        if seen.insert(id) {
            unique.push(id);
        }
    }
    Ok(unique)
}
