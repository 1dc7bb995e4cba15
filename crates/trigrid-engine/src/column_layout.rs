//! Column-width layout codec.
//!
//! The embedder owns the persisted store itself (read on startup, written
//! on every resize); this module owns the storage key, the JSON shape, and
//! the sanitation. Restore never fails: malformed input degrades to the
//! default widths plus warnings.

use std::collections::BTreeMap;

use serde_json::Value;
use trigrid_core::record::COLUMNS;

pub const COLUMN_WIDTH_STORAGE_KEY: &str = "trigrid.column-widths.v1";

pub const MIN_COLUMN_WIDTH_PX: u32 = 40;
pub const MAX_COLUMN_WIDTH_PX: u32 = 600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnWidthLoadOutcome {
    /// Column index → pixel width, every known column present.
    pub widths: BTreeMap<usize, u32>,
    pub warnings: Vec<String>,
}

#[must_use]
pub fn default_column_widths() -> BTreeMap<usize, u32> {
    COLUMNS
        .iter()
        .enumerate()
        .map(|(index, column)| (index, column.default_width_px))
        .collect()
}

/// Parse a persisted width map. Blank input is a fresh profile; anything
/// unusable degrades to defaults with a warning rather than an error.
#[must_use]
pub fn restore_column_widths(raw: &str) -> ColumnWidthLoadOutcome {
    let mut widths = default_column_widths();
    let mut warnings = Vec::new();

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ColumnWidthLoadOutcome { widths, warnings };
    }

    let parsed = match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => value,
        Err(err) => {
            warnings.push(format!("invalid json; default widths restored ({err})"));
            return ColumnWidthLoadOutcome { widths, warnings };
        }
    };
    let Some(entries) = parsed.as_object() else {
        warnings.push("expected an object of index:width; default widths restored".to_owned());
        return ColumnWidthLoadOutcome { widths, warnings };
    };

    for (key, value) in entries {
        let Ok(index) = key.parse::<usize>() else {
            warnings.push(format!("non-numeric column index {key:?} dropped"));
            continue;
        };
        if index >= COLUMNS.len() {
            warnings.push(format!("unknown column index {index} dropped"));
            continue;
        }
        let Some(px) = value.as_u64() else {
            warnings.push(format!("column {index} width is not a number; kept default"));
            continue;
        };
        widths.insert(index, clamp_width(px));
    }

    ColumnWidthLoadOutcome { widths, warnings }
}

/// Encode for persistence: a JSON object of index → px.
#[must_use]
pub fn encode_column_widths(widths: &BTreeMap<usize, u32>) -> String {
    let entries: serde_json::Map<String, Value> = widths
        .iter()
        .map(|(index, px)| (index.to_string(), Value::from(*px)))
        .collect();
    Value::Object(entries).to_string()
}

/// Apply one resize. Unknown indexes are ignored; the clamped width
/// actually stored is returned.
pub fn set_width(widths: &mut BTreeMap<usize, u32>, index: usize, px: u32) -> Option<u32> {
    if index >= COLUMNS.len() {
        return None;
    }
    let clamped = clamp_width(u64::from(px));
    widths.insert(index, clamped);
    Some(clamped)
}

fn clamp_width(px: u64) -> u32 {
    let px = px.min(u64::from(MAX_COLUMN_WIDTH_PX)) as u32;
    px.max(MIN_COLUMN_WIDTH_PX)
}

#[cfg(test)]
mod tests {
    use trigrid_core::record::COLUMNS;

    use super::{
        default_column_widths, encode_column_widths, restore_column_widths, set_width,
        MAX_COLUMN_WIDTH_PX, MIN_COLUMN_WIDTH_PX,
    };

    #[test]
    fn blank_input_is_a_fresh_profile() {
        let outcome = restore_column_widths("   ");
        assert_eq!(outcome.widths, default_column_widths());
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn invalid_json_degrades_to_defaults_with_warning() {
        let outcome = restore_column_widths("{not json");
        assert_eq!(outcome.widths, default_column_widths());
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].contains("invalid json"));
    }

    #[test]
    fn wrong_shape_degrades_to_defaults() {
        let outcome = restore_column_widths("[120, 80]");
        assert_eq!(outcome.widths, default_column_widths());
        assert_eq!(outcome.warnings.len(), 1);
    }

    #[test]
    fn valid_entries_overlay_defaults_and_clamp() {
        let outcome = restore_column_widths(r#"{"0": 5, "2": 250, "4": 9999}"#);
        assert_eq!(outcome.widths.get(&0), Some(&MIN_COLUMN_WIDTH_PX));
        assert_eq!(outcome.widths.get(&2), Some(&250));
        assert_eq!(outcome.widths.get(&4), Some(&MAX_COLUMN_WIDTH_PX));
        // Untouched columns keep their defaults.
        assert_eq!(outcome.widths.get(&1), Some(&COLUMNS[1].default_width_px));
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn unknown_and_malformed_entries_are_dropped_with_warnings() {
        let outcome = restore_column_widths(r#"{"99": 120, "owner": 100, "1": "wide"}"#);
        assert_eq!(outcome.widths, default_column_widths());
        assert_eq!(outcome.warnings.len(), 3);
    }

    #[test]
    fn encode_restore_round_trip() {
        let mut widths = default_column_widths();
        assert_eq!(set_width(&mut widths, 2, 250), Some(250));
        assert_eq!(set_width(&mut widths, 0, 10), Some(MIN_COLUMN_WIDTH_PX));
        assert_eq!(set_width(&mut widths, 99, 100), None);

        let encoded = encode_column_widths(&widths);
        let outcome = restore_column_widths(&encoded);
        assert_eq!(outcome.widths, widths);
        assert!(outcome.warnings.is_empty());
    }
}
