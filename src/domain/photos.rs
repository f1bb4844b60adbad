//! Photo list <-> single TEXT column encoding.
//!
//! Listings keep their photo URIs in one `photos_json` column. Encoding is a
//! plain JSON array of strings; decoding is lenient so one corrupted row can
//! never fail a whole query.

/// Encode an ordered photo list as a JSON array string.
pub fn encode_photos(photos: &[String]) -> String {
    serde_json::to_string(photos).unwrap_or_else(|_| "[]".to_string())
}

/// Decode a stored photo column. Unparseable input yields an empty list;
/// blank entries inside a valid array are dropped.
pub fn decode_photos(json: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(json) {
        Ok(photos) => photos.into_iter().filter(|p| !p.trim().is_empty()).collect(),
        Err(e) => {
            log::warn!("unparseable photos column ({}), treating as empty", e);
            Vec::new()
        }
    }
}
