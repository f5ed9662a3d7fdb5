use chrono::Utc;
use sea_orm::sea_query::LockType;
use sea_orm::*;

use super::{StoreError, StoreResult, normalize_name, require_id};
use crate::entity::{category, clothing_item};

/// CRUD for user-owned categories.
#[derive(Clone)]
pub struct CategoryStore {
    db: DatabaseConnection,
}

impl CategoryStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_by_user(&self, user_id: i32) -> StoreResult<Vec<category::Model>> {
        require_id(user_id, "user_id")?;

        let rows = category::Entity::find()
            .filter(category::Column::UserId.eq(user_id))
            .order_by_asc(category::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    pub async fn get_by_user_and_id(
        &self,
        user_id: i32,
        category_id: i32,
    ) -> StoreResult<category::Model> {
        require_id(user_id, "user_id")?;
        require_id(category_id, "id")?;
        find_scoped(&self.db, user_id, category_id).await
    }

    pub async fn create(&self, user_id: i32, name: &str) -> StoreResult<category::Model> {
        require_id(user_id, "user_id")?;
        let name = normalize_name(name)?;

        let now = Utc::now();
        let model = category::ActiveModel {
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

    pub async fn update(
        &self,
        user_id: i32,
        category_id: i32,
        name: &str,
    ) -> StoreResult<category::Model> {
        require_id(user_id, "user_id")?;
        require_id(category_id, "id")?;
        let name = normalize_name(name)?;

        let txn = self.db.begin().await?;
        let existing = find_scoped_for_update(&txn, user_id, category_id).await?;

        let mut active: category::ActiveModel = existing.into();
        active.name = Set(name);
        active.updated_at = Set(Utc::now());

        let model = active.update(&txn).await?;
        txn.commit().await?;

        Ok(model)
    }

    /// Delete an owned category. Refused with `Conflict` while clothing items
    /// still reference it.
    pub async fn delete(&self, user_id: i32, category_id: i32) -> StoreResult<()> {
        require_id(user_id, "user_id")?;
        require_id(category_id, "id")?;

        let txn = self.db.begin().await?;
        find_scoped_for_update(&txn, user_id, category_id).await?;

        let in_use = clothing_item::Entity::find()
            .filter(clothing_item::Column::CategoryId.eq(category_id))
            .count(&txn)
            .await?;
        if in_use > 0 {
            return Err(StoreError::Conflict(format!(
                "Category is still used by {in_use} clothing item(s)"
            )));
        }

        let res = category::Entity::delete_many()
            .filter(category::Column::Id.eq(category_id))
            .filter(category::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;
        if res.rows_affected == 0 {
            return Err(StoreError::NotFound("Category"));
        }

        txn.commit().await?;
        Ok(())
    }
}

async fn find_scoped<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
    category_id: i32,
) -> StoreResult<category::Model> {
    category::Entity::find_by_id(category_id)
        .filter(category::Column::UserId.eq(user_id))
        .one(conn)
        .await?
        .ok_or(StoreError::NotFound("Category"))
}

async fn find_scoped_for_update<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
    category_id: i32,
) -> StoreResult<category::Model> {
    category::Entity::find_by_id(category_id)
        .filter(category::Column::UserId.eq(user_id))
        .lock(LockType::Update)
        .one(conn)
        .await?
        .ok_or(StoreError::NotFound("Category"))
}
