//! Maintenance of the `clothing_item_tags` join table.
//!
//! Functions here are generic over the connection so they run the same way on
//! the pool or inside an open transaction. Ownership of the item and tags is
//! checked by the callers.

use std::collections::HashMap;

use sea_orm::sea_query::OnConflict;
use sea_orm::*;

use super::StoreResult;
use crate::entity::{clothing_item_tag, tag};

/// Insert one association row per tag id.
///
/// Issues a single multi-row `INSERT`, so a failing pair aborts the whole
/// batch. Call this inside a transaction that also covers the item write.
pub async fn bulk_insert<C: ConnectionTrait>(
    conn: &C,
    item_id: i32,
    tag_ids: &[i32],
) -> StoreResult<()> {
    if tag_ids.is_empty() {
        return Ok(());
    }

    let rows = tag_ids.iter().map(|&tag_id| clothing_item_tag::ActiveModel {
        clothing_item_id: Set(item_id),
        tag_id: Set(tag_id),
    });

    clothing_item_tag::Entity::insert_many(rows)
        .exec_without_returning(conn)
        .await
        .inspect_err(|e| tracing::warn!(item_id, ?tag_ids, "Failed to bind tags: {e}"))?;

    Ok(())
}

/// Replace the full tag set of an item: delete everything, then insert
/// `tag_ids`.
///
/// Runs in its own transaction, which becomes a savepoint when `conn` is
/// already a transaction, so the item is never left half-tagged.
pub async fn replace_all<C: TransactionTrait>(
    conn: &C,
    item_id: i32,
    tag_ids: &[i32],
) -> StoreResult<()> {
    let txn = conn.begin().await?;
    delete_all(&txn, item_id).await?;
    bulk_insert(&txn, item_id, tag_ids).await?;
    txn.commit().await?;
    Ok(())
}

/// Attach a single tag. Attaching an already attached tag is a no-op.
pub async fn insert_one<C: ConnectionTrait>(conn: &C, item_id: i32, tag_id: i32) -> StoreResult<()> {
    let row = clothing_item_tag::ActiveModel {
        clothing_item_id: Set(item_id),
        tag_id: Set(tag_id),
    };

    let result = clothing_item_tag::Entity::insert(row)
        .on_conflict(
            OnConflict::columns([
                clothing_item_tag::Column::ClothingItemId,
                clothing_item_tag::Column::TagId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(conn)
        .await;

    match result {
        Ok(_) | Err(DbErr::RecordNotInserted) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Detach a single tag. Detaching a pair that does not exist is not an error.
pub async fn delete_one<C: ConnectionTrait>(conn: &C, item_id: i32, tag_id: i32) -> StoreResult<()> {
    clothing_item_tag::Entity::delete_many()
        .filter(clothing_item_tag::Column::ClothingItemId.eq(item_id))
        .filter(clothing_item_tag::Column::TagId.eq(tag_id))
        .exec(conn)
        .await?;
    Ok(())
}

/// Remove every association of an item. Returns the number of rows removed.
pub async fn delete_all<C: ConnectionTrait>(conn: &C, item_id: i32) -> StoreResult<u64> {
    let res = clothing_item_tag::Entity::delete_many()
        .filter(clothing_item_tag::Column::ClothingItemId.eq(item_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}

/// Remove every association that points at a tag.
pub async fn delete_all_for_tag<C: ConnectionTrait>(conn: &C, tag_id: i32) -> StoreResult<u64> {
    let res = clothing_item_tag::Entity::delete_many()
        .filter(clothing_item_tag::Column::TagId.eq(tag_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}

/// Load the tags of several items with one join query.
///
/// Every requested id is present in the result, possibly with an empty list.
/// Tags are ordered by id.
pub async fn tags_for_items<C: ConnectionTrait>(
    conn: &C,
    item_ids: &[i32],
) -> StoreResult<HashMap<i32, Vec<tag::Model>>> {
    let mut by_item: HashMap<i32, Vec<tag::Model>> =
        item_ids.iter().map(|&id| (id, Vec::new())).collect();
    if item_ids.is_empty() {
        return Ok(by_item);
    }

    let rows = clothing_item_tag::Entity::find()
        .filter(clothing_item_tag::Column::ClothingItemId.is_in(item_ids.iter().copied()))
        .find_also_related(tag::Entity)
        .order_by_asc(clothing_item_tag::Column::ClothingItemId)
        .order_by_asc(clothing_item_tag::Column::TagId)
        .all(conn)
        .await?;

    for (link, tag) in rows {
        if let Some(tag) = tag {
            by_item.entry(link.clothing_item_id).or_default().push(tag);
        }
    }

    Ok(by_item)
}

/// Load the tags of a single item, ordered by id.
pub async fn tags_for_item<C: ConnectionTrait>(conn: &C, item_id: i32) -> StoreResult<Vec<tag::Model>> {
    let mut by_item = tags_for_items(conn, &[item_id]).await?;
    Ok(by_item.remove(&item_id).unwrap_or_default())
}
