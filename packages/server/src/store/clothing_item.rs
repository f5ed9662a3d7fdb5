use chrono::{DateTime, Utc};
use sea_orm::prelude::Expr;
use sea_orm::sea_query::LockType;
use sea_orm::*;

use super::{
    StoreError, StoreResult, normalize_image_url, require_id, tag_association, unique_tag_ids,
};
use crate::entity::{category, clothing_item, tag};

/// A clothing item together with the tags currently attached to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClothingItem {
    pub id: i32,
    pub user_id: i32,
    pub category_id: i32,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub tags: Vec<tag::Model>,
}

impl ClothingItem {
    fn from_row(row: clothing_item::Model, tags: Vec<tag::Model>) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            category_id: row.category_id,
            image_url: row.image_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
            tags,
        }
    }

    pub fn tag_ids(&self) -> Vec<i32> {
        self.tags.iter().map(|t| t.id).collect()
    }
}

/// CRUD for clothing items, including the transactional create-with-tags and
/// replace-tags-on-update flows.
#[derive(Clone)]
pub struct ClothingItemStore {
    db: DatabaseConnection,
}

impl ClothingItemStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All items owned by `user_id`, ordered by id, each with its tag list.
    pub async fn list_by_user(&self, user_id: i32) -> StoreResult<Vec<ClothingItem>> {
        require_id(user_id, "user_id")?;

        let rows = clothing_item::Entity::find()
            .filter(clothing_item::Column::UserId.eq(user_id))
            .order_by_asc(clothing_item::Column::Id)
            .all(&self.db)
            .await?;

        let ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
        let mut tags = tag_association::tags_for_items(&self.db, &ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let item_tags = tags.remove(&row.id).unwrap_or_default();
                ClothingItem::from_row(row, item_tags)
            })
            .collect())
    }

    /// A single item scoped to its owner. Another user's item is reported as
    /// `NotFound`, exactly like a missing one.
    pub async fn get_by_user_and_id(&self, user_id: i32, item_id: i32) -> StoreResult<ClothingItem> {
        require_id(user_id, "user_id")?;
        require_id(item_id, "id")?;
        load_item(&self.db, user_id, item_id).await
    }

    /// Insert an item and bind its tags in one transaction.
    ///
    /// If any tag cannot be bound, the item insert is rolled back too.
    pub async fn create(
        &self,
        user_id: i32,
        category_id: i32,
        image_url: &str,
        tag_ids: &[i32],
    ) -> StoreResult<ClothingItem> {
        require_id(user_id, "user_id")?;
        require_id(category_id, "category_id")?;
        let image_url = normalize_image_url(image_url)?;
        let tag_ids = unique_tag_ids(tag_ids)?;

        let txn = self.db.begin().await?;
        ensure_category_owned(&txn, user_id, category_id).await?;
        ensure_tags_owned(&txn, user_id, &tag_ids).await?;

        let now = Utc::now();
        let row = clothing_item::ActiveModel {
            user_id: Set(user_id),
            category_id: Set(category_id),
            image_url: Set(image_url),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .inspect_err(|e| tracing::warn!(user_id, "Failed to insert clothing item: {e}"))?;

        tag_association::bulk_insert(&txn, row.id, &tag_ids).await?;
        txn.commit().await?;

        tracing::debug!(user_id, item_id = row.id, tags = tag_ids.len(), "Clothing item created");
        self.get_by_user_and_id(user_id, row.id).await
    }

    /// Update category and image of an owned item and replace its whole tag
    /// set with `tag_ids`, atomically.
    pub async fn update(
        &self,
        user_id: i32,
        item_id: i32,
        category_id: i32,
        image_url: &str,
        tag_ids: &[i32],
    ) -> StoreResult<ClothingItem> {
        require_id(user_id, "user_id")?;
        require_id(item_id, "id")?;
        require_id(category_id, "category_id")?;
        let image_url = normalize_image_url(image_url)?;
        let tag_ids = unique_tag_ids(tag_ids)?;

        let txn = self.db.begin().await?;
        ensure_category_owned(&txn, user_id, category_id).await?;
        ensure_tags_owned(&txn, user_id, &tag_ids).await?;

        let res = clothing_item::Entity::update_many()
            .col_expr(clothing_item::Column::CategoryId, Expr::value(category_id))
            .col_expr(clothing_item::Column::ImageUrl, Expr::value(image_url))
            .col_expr(clothing_item::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(clothing_item::Column::Id.eq(item_id))
            .filter(clothing_item::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;
        if res.rows_affected == 0 {
            return Err(StoreError::NotFound("Clothing item"));
        }

        tag_association::replace_all(&txn, item_id, &tag_ids).await?;

        let item = load_item(&txn, user_id, item_id).await?;
        txn.commit().await?;

        Ok(item)
    }

    /// Delete an owned item together with its tag associations.
    pub async fn delete(&self, user_id: i32, item_id: i32) -> StoreResult<()> {
        require_id(user_id, "user_id")?;
        require_id(item_id, "id")?;

        let txn = self.db.begin().await?;

        // Lock the scoped row first so a foreign user never reaches the
        // association cleanup.
        clothing_item::Entity::find_by_id(item_id)
            .filter(clothing_item::Column::UserId.eq(user_id))
            .lock(LockType::Update)
            .one(&txn)
            .await?
            .ok_or(StoreError::NotFound("Clothing item"))?;

        let unbound = tag_association::delete_all(&txn, item_id).await?;

        let res = clothing_item::Entity::delete_many()
            .filter(clothing_item::Column::Id.eq(item_id))
            .filter(clothing_item::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;
        if res.rows_affected == 0 {
            return Err(StoreError::NotFound("Clothing item"));
        }

        txn.commit().await?;
        tracing::debug!(user_id, item_id, unbound, "Clothing item deleted");
        Ok(())
    }

    /// Attach one tag. The caller has already checked that the item and the
    /// tag belong to the requesting user.
    pub async fn add_tag(&self, item_id: i32, tag_id: i32) -> StoreResult<()> {
        require_id(item_id, "id")?;
        require_id(tag_id, "tag_id")?;
        tag_association::insert_one(&self.db, item_id, tag_id).await
    }

    /// Detach one tag. The caller has already checked item ownership.
    pub async fn remove_tag(&self, item_id: i32, tag_id: i32) -> StoreResult<()> {
        require_id(item_id, "id")?;
        require_id(tag_id, "tag_id")?;
        tag_association::delete_one(&self.db, item_id, tag_id).await
    }
}

async fn load_item<C: ConnectionTrait>(conn: &C, user_id: i32, item_id: i32) -> StoreResult<ClothingItem> {
    let row = clothing_item::Entity::find_by_id(item_id)
        .filter(clothing_item::Column::UserId.eq(user_id))
        .one(conn)
        .await?
        .ok_or(StoreError::NotFound("Clothing item"))?;

    let tags = tag_association::tags_for_item(conn, row.id).await?;
    Ok(ClothingItem::from_row(row, tags))
}

async fn ensure_category_owned<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
    category_id: i32,
) -> StoreResult<()> {
    let owned = category::Entity::find_by_id(category_id)
        .filter(category::Column::UserId.eq(user_id))
        .count(conn)
        .await?;
    if owned == 0 {
        return Err(StoreError::Validation(format!(
            "category_id {category_id} does not reference one of your categories"
        )));
    }
    Ok(())
}

async fn ensure_tags_owned<C: ConnectionTrait>(conn: &C, user_id: i32, tag_ids: &[i32]) -> StoreResult<()> {
    if tag_ids.is_empty() {
        return Ok(());
    }

    let owned: Vec<i32> = tag::Entity::find()
        .filter(tag::Column::Id.is_in(tag_ids.iter().copied()))
        .filter(tag::Column::UserId.eq(user_id))
        .select_only()
        .column(tag::Column::Id)
        .into_tuple()
        .all(conn)
        .await?;

    if let Some(missing) = tag_ids.iter().find(|&&id| !owned.contains(&id)) {
        return Err(StoreError::Validation(format!(
            "tag_id {missing} does not reference one of your tags"
        )));
    }
    Ok(())
}
