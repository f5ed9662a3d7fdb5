use chrono::Utc;
use sea_orm::sea_query::LockType;
use sea_orm::*;

use super::{StoreError, StoreResult, normalize_name, require_id, tag_association};
use crate::entity::tag;

/// CRUD for tags. Tags are owned by a single user and every operation is
/// scoped by that user's id.
#[derive(Clone)]
pub struct TagStore {
    db: DatabaseConnection,
}

impl TagStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, user_id: i32) -> StoreResult<Vec<tag::Model>> {
        require_id(user_id, "user_id")?;

        let rows = tag::Entity::find()
            .filter(tag::Column::UserId.eq(user_id))
            .order_by_asc(tag::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, user_id: i32, tag_id: i32) -> StoreResult<tag::Model> {
        require_id(user_id, "user_id")?;
        require_id(tag_id, "id")?;

        tag::Entity::find_by_id(tag_id)
            .filter(tag::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?
            .ok_or(StoreError::NotFound("Tag"))
    }

    pub async fn create(&self, user_id: i32, name: &str) -> StoreResult<tag::Model> {
        require_id(user_id, "user_id")?;
        let name = normalize_name(name)?;

        let now = Utc::now();
        let model = tag::ActiveModel {
            user_id: Set(user_id),
            name: Set(name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(model)
    }

    pub async fn update(&self, user_id: i32, tag_id: i32, name: &str) -> StoreResult<tag::Model> {
        require_id(user_id, "user_id")?;
        require_id(tag_id, "id")?;
        let name = normalize_name(name)?;

        let txn = self.db.begin().await?;
        let existing = find_scoped_for_update(&txn, user_id, tag_id).await?;

        let mut active: tag::ActiveModel = existing.into();
        active.name = Set(name);
        active.updated_at = Set(Utc::now());

        let model = active.update(&txn).await?;
        txn.commit().await?;

        Ok(model)
    }

    /// Delete an owned tag, detaching it from every clothing item first.
    pub async fn delete(&self, user_id: i32, tag_id: i32) -> StoreResult<()> {
        require_id(user_id, "user_id")?;
        require_id(tag_id, "id")?;

        let txn = self.db.begin().await?;
        find_scoped_for_update(&txn, user_id, tag_id).await?;

        let detached = tag_association::delete_all_for_tag(&txn, tag_id).await?;

        let res = tag::Entity::delete_many()
            .filter(tag::Column::Id.eq(tag_id))
            .filter(tag::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;
        if res.rows_affected == 0 {
            return Err(StoreError::NotFound("Tag"));
        }

        txn.commit().await?;
        tracing::debug!(user_id, tag_id, detached, "Tag deleted");
        Ok(())
    }
}

async fn find_scoped_for_update<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
    tag_id: i32,
) -> StoreResult<tag::Model> {
    tag::Entity::find_by_id(tag_id)
        .filter(tag::Column::UserId.eq(user_id))
        .lock(LockType::Update)
        .one(conn)
        .await?
        .ok_or(StoreError::NotFound("Tag"))
}
