use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};

const LAST_MODIFIED: &str = "lastModified";

/// Naive layouts accepted besides RFC 3339. Naive values are read as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
];

/// One part-inventory entry. `lastModified` is parsed; every other field is
/// kept as the upstream sent it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryRecord {
    #[serde(rename = "lastModified")]
    pub last_modified: DateTime<FixedOffset>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl InventoryRecord {
    pub fn from_upstream(mut fields: Map<String, Value>) -> AppResult<Self> {
        let raw = match fields.remove(LAST_MODIFIED) {
            Some(Value::String(raw)) => raw,
            Some(other) => {
                return Err(AppError::UpstreamSchema(format!(
                    "{} must be a string, got {}",
                    LAST_MODIFIED, other
                )))
            }
            None => {
                return Err(AppError::UpstreamSchema(format!(
                    "part inventory entry without {}",
                    LAST_MODIFIED
                )))
            }
        };

        Ok(Self {
            last_modified: parse_iso8601(&raw)?,
            fields,
        })
    }
}

/// Parses the ISO-8601 forms the upstream is known to emit: full RFC 3339,
/// offset-less date-times and bare dates.
pub fn parse_iso8601(value: &str) -> AppResult<DateTime<FixedOffset>> {
    let first_err = match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => return Ok(dt),
        Err(e) => e,
    };

    // chrono skips whitespace before numeric fields; padded input is malformed.
    if value.trim() != value {
        return Err(AppError::Timestamp {
            value: value.to_string(),
            source: first_err,
        });
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Ok(dt);
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc().fixed_offset());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc().fixed_offset());
        }
    }

    Err(AppError::Timestamp {
        value: value.to_string(),
        source: first_err,
    })
}

#[derive(Debug, Deserialize)]
struct InventoryPayload {
    #[serde(rename = "Inventory")]
    inventory: InventoryBody,
}

#[derive(Debug, Deserialize)]
struct InventoryBody {
    #[serde(rename = "PartInventoryArray")]
    array: PartInventoryArray,
}

#[derive(Debug, Deserialize)]
struct PartInventoryArray {
    #[serde(rename = "PartInventory")]
    items: Vec<Map<String, Value>>,
}

/// Extracts `Inventory.PartInventoryArray.PartInventory` from a 200 body and
/// parses every `lastModified`. The first bad entry fails the whole page.
pub fn parse_part_inventory(body: &str) -> AppResult<Vec<InventoryRecord>> {
    let payload: InventoryPayload = serde_json::from_str(body)
        .map_err(|e| AppError::UpstreamSchema(format!("inventory: {}", e)))?;

    payload
        .inventory
        .array
        .items
        .into_iter()
        .map(InventoryRecord::from_upstream)
        .collect()
}
