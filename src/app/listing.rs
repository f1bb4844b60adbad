//! Listing repository: create and query marketplace listings.

use chrono::Utc;
use rusqlite::params;
use serde::Deserialize;

use crate::domain::{
    decode_photos, encode_photos, ItemCondition, Listing, ListingCategory, ListingStatus,
    NO_DESCRIPTION,
};
use crate::error::AppError;
use crate::infra::{get_connection, DbPool};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingCreateReq {
    pub seller_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub category: ListingCategory,
    pub price_cents: i64,
    pub condition: ItemCondition,
    pub photos: Vec<String>,
    pub status: Option<ListingStatus>,
    /// Epoch millis; defaults to now. Immutable after creation.
    pub created_at: Option<i64>,
}

const LISTING_COLUMNS: &str =
    "id, seller_id, title, description, category, price_cents, condition, photos_json, status, created_at";

fn listing_from_row(row: &rusqlite::Row) -> rusqlite::Result<Listing> {
    let category_str: String = row.get(4)?;
    let condition_str: String = row.get(6)?;
    let status_str: String = row.get(8)?;
    let parse_failure = |idx: usize, what: &str, value: &str| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            format!("unknown {what} '{value}'").into(),
        )
    };
    let photos_json: String = row.get(7)?;
    Ok(Listing {
        id: row.get(0)?,
        seller_id: row.get(1)?,
        title: row.get(2)?,
        description: row
            .get::<_, Option<String>>(3)?
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        category: ListingCategory::parse(&category_str)
            .ok_or_else(|| parse_failure(4, "category", &category_str))?,
        price_cents: row.get(5)?,
        condition: ItemCondition::parse(&condition_str)
            .ok_or_else(|| parse_failure(6, "condition", &condition_str))?,
        // lenient: a corrupted column becomes an empty list, never a failed read
        photos: decode_photos(&photos_json),
        status: ListingStatus::parse(&status_str)
            .ok_or_else(|| parse_failure(8, "status", &status_str))?,
        created_at: row.get(9)?,
    })
}

/// Blank or missing descriptions collapse to the display default.
fn normalize_description(description: Option<String>) -> String {
    match description {
        Some(d) if !d.trim().is_empty() => d.trim().to_string(),
        _ => NO_DESCRIPTION.to_string(),
    }
}

/// Inserts a listing. A `seller_id` with no matching account is rejected by
/// the store's foreign key check; no pre-check is done here.
pub fn listing_create(pool: &DbPool, req: ListingCreateReq) -> Result<Listing, AppError> {
    let title = req.title.trim();
    if title.is_empty() {
        return Err(AppError::Validation("title is required".into()));
    }
    if req.price_cents < 0 {
        return Err(AppError::Validation("price must be non-negative".into()));
    }
    let description = normalize_description(req.description);
    let status = req.status.unwrap_or(ListingStatus::Active);
    let created_at = req.created_at.unwrap_or_else(|| Utc::now().timestamp_millis());
    // blanks would be dropped by decode anyway; keep stored and returned equal
    let photos: Vec<String> = req
        .photos
        .into_iter()
        .filter(|p| !p.trim().is_empty())
        .collect();
    let photos_json = encode_photos(&photos);

    let conn = get_connection(pool);
    conn.execute(
        "INSERT INTO listings (seller_id, title, description, category, price_cents, condition, photos_json, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            req.seller_id,
            title,
            &description,
            req.category.as_str(),
            req.price_cents,
            req.condition.as_str(),
            &photos_json,
            status.as_str(),
            created_at
        ],
    )?;

    Ok(Listing {
        id: conn.last_insert_rowid(),
        seller_id: req.seller_id,
        title: title.to_string(),
        description,
        category: req.category,
        price_cents: req.price_cents,
        condition: req.condition,
        photos,
        status,
        created_at,
    })
}

/// Every listing, newest first.
pub fn listing_list(pool: &DbPool) -> Result<Vec<Listing>, AppError> {
    let conn = get_connection(pool);
    let mut stmt = conn.prepare(&format!(
        "SELECT {LISTING_COLUMNS} FROM listings ORDER BY created_at DESC"
    ))?;
    let rows = stmt.query_map([], listing_from_row)?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// One seller's listings, newest first.
pub fn listing_list_for_seller(pool: &DbPool, seller_id: i64) -> Result<Vec<Listing>, AppError> {
    let conn = get_connection(pool);
    let mut stmt = conn.prepare(&format!(
        "SELECT {LISTING_COLUMNS} FROM listings WHERE seller_id = ?1 ORDER BY created_at DESC"
    ))?;
    let rows = stmt.query_map([seller_id], listing_from_row)?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
