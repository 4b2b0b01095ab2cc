use sqlx::{MySql, MySqlPool, Transaction};

use crate::error::AppResult;
use crate::models::*;

// ── Reads ─────────────────────────────────────────────────────────────────────

pub async fn fetch_all_items(pool: &MySqlPool) -> AppResult<Vec<CatalogueItem>> {
    let items = sqlx::query_as::<_, CatalogueItem>(
        "SELECT seller_id, item_id, item_name, item_price, item_qty, item_desc, category, image_url
         FROM Items_Catalogue",
    )
    .fetch_all(pool)
    .await?;

    Ok(items)
}

pub async fn fetch_items_by_seller(
    pool: &MySqlPool,
    seller_id: i64,
) -> AppResult<Vec<CatalogueItem>> {
    let items = sqlx::query_as::<_, CatalogueItem>(
        "SELECT seller_id, item_id, item_name, item_price, item_qty, item_desc, category, image_url
         FROM Items_Catalogue
         WHERE seller_id = ?",
    )
    .bind(seller_id)
    .fetch_all(pool)
    .await?;

    Ok(items)
}

/// Zero-or-one row in practice; kept as a list so all three reads share the
/// same `{"items": [...]}` response shape.
pub async fn fetch_item(
    pool: &MySqlPool,
    seller_id: i64,
    item_id: i64,
) -> AppResult<Vec<CatalogueItem>> {
    let items = sqlx::query_as::<_, CatalogueItem>(
        "SELECT seller_id, item_id, item_name, item_price, item_qty, item_desc, category, image_url
         FROM Items_Catalogue
         WHERE seller_id = ? AND item_id = ?",
    )
    .bind(seller_id)
    .bind(item_id)
    .fetch_all(pool)
    .await?;

    Ok(items)
}

// ── Writes ────────────────────────────────────────────────────────────────────

/// Next id for a seller: `MAX(item_id) + 1` when the seller already has rows,
/// `seller_id * 1000` otherwise. Two concurrent inserts for the same seller
/// can compute the same id; the schema carries no uniqueness constraint, so
/// the duplicate is stored. Known race, documented in DESIGN.md.
async fn next_item_id(tx: &mut Transaction<'_, MySql>, seller_id: i64) -> AppResult<i64> {
    let (max,): (Option<i64>,) =
        sqlx::query_as("SELECT MAX(item_id) FROM Items_Catalogue WHERE seller_id = ?")
            .bind(seller_id)
            .fetch_one(&mut **tx)
            .await?;

    Ok(next_id_from_max(seller_id, max))
}

fn next_id_from_max(seller_id: i64, max: Option<i64>) -> i64 {
    match max {
        Some(max) => max + 1,
        None => seller_id * 1000,
    }
}

/// Insert a new catalogue row inside a transaction and return its assigned
/// item id. The transaction rolls back on drop if any statement fails.
pub async fn insert_item(pool: &MySqlPool, payload: &NewItem) -> AppResult<i64> {
    let mut tx = pool.begin().await?;

    let item_id = next_item_id(&mut tx, payload.seller_id).await?;

    sqlx::query(
        "INSERT INTO Items_Catalogue
            (seller_id, item_id, item_name, item_price, item_qty, item_desc, category, image_url)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(payload.seller_id)
    .bind(item_id)
    .bind(&payload.item_name)
    .bind(payload.item_price)
    .bind(payload.item_qty)
    .bind(&payload.item_desc)
    .bind(&payload.category)
    .bind(&payload.image_url)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(item_id)
}

/// Set `item_qty` for one `(seller_id, item_id)` pair. The affected-row count
/// is not checked: updating a missing pair reports success and mutates
/// nothing, matching the documented no-op-success behavior.
pub async fn update_item_qty(
    pool: &MySqlPool,
    seller_id: i64,
    item_id: i64,
    new_qty: i32,
) -> AppResult<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("UPDATE Items_Catalogue SET item_qty = ? WHERE seller_id = ? AND item_id = ?")
        .bind(new_qty)
        .bind(seller_id)
        .bind(item_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}
