//! On-disk format of a favorites list.
//!
//! A list file is a JSON object with a single `items` key:
//!
//! ```json
//! {"items":[{"frequency":104300,"title":"Radio Rock"}]}
//! ```
//!
//! ## Decoding policy
//!
//! Reading never fails. A document that is not JSON, is not an object, or
//! has no `items` array decodes to an empty list. Inside `items`, every
//! object is kept whatever its fields contain; entries that are not
//! objects at all are dropped, keeping the entries around them.

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::station::FavoriteStation;

pub const KEY_ITEMS: &str = "items";

/// Content written for a freshly created list.
pub const EMPTY_LIST: &str = r#"{"items":[]}"#;

#[derive(Serialize)]
struct ListFileRef<'a> {
    items: &'a [FavoriteStation],
}

/// Decode list file content, applying the policy described above.
pub fn decode(content: &str) -> Vec<FavoriteStation> {
    if content.trim().is_empty() {
        return Vec::new();
    }

    let doc: Value = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(e) => {
            warn!("[favorites] Malformed list file, using empty list: {}", e);
            return Vec::new();
        }
    };

    let Some(items) = doc.get(KEY_ITEMS).and_then(Value::as_array) else {
        warn!("[favorites] List file has no \"{}\" array, using empty list", KEY_ITEMS);
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(idx, item)| match item {
            Value::Object(fields) => Some(FavoriteStation::from_fields(fields.clone())),
            _ => {
                warn!("[favorites] Skipping item {}: not an object", idx);
                None
            }
        })
        .collect()
}

/// Encode stations into list file content.
pub fn encode(stations: &[FavoriteStation]) -> serde_json::Result<String> {
    serde_json::to_string(&ListFileRef { items: stations })
}
