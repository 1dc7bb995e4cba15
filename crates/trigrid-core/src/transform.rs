//! Raw record payload → `IncidentRecord` mapping.
//!
//! Every absent field defaults to the empty string, and `exception`
//! computes to "NO" when the raw record carries no status at all (policy
//! preserved from the upstream source).

use serde_json::Value;

use crate::record::IncidentRecord;
use crate::source::LoadError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    pub records: Vec<IncidentRecord>,
    /// One entry per element dropped from the raw payload.
    pub skipped: Vec<String>,
}

/// Map one raw object to a record. Non-string and missing fields become
/// empty strings; numbers and booleans are stringified as-is.
#[must_use]
pub fn record_from_raw(raw: &Value) -> IncidentRecord {
    let status_present = raw.get("status").is_some_and(|value| !value.is_null());
    let exception = {
        let given = string_field(raw, "exception");
        if given.is_empty() && !status_present {
            "NO".to_owned()
        } else {
            given
        }
    };

    IncidentRecord {
        id: string_field(raw, "id"),
        primary_key: string_field(raw, "primaryKey"),
        owner: string_field(raw, "owner"),
        status: string_field(raw, "status"),
        exception,
        comment: string_field(raw, "comment"),
        master_incident: string_field(raw, "masterIncident"),
        bd_table: string_field(raw, "bdTable"),
        bd_table_attr: string_field(raw, "bdTableAttr"),
    }
}

/// Map a raw payload to records. The top level must be an array; elements
/// that are not objects are skipped and reported, not fatal.
pub fn records_from_raw(raw: &Value) -> Result<LoadOutcome, LoadError> {
    let Some(items) = raw.as_array() else {
        return Err(LoadError::MalformedBody(
            "expected a top-level array of records".to_owned(),
        ));
    };

    let mut records = Vec::with_capacity(items.len());
    let mut skipped = Vec::new();
    for (index, item) in items.iter().enumerate() {
        if item.is_object() {
            records.push(record_from_raw(item));
        } else {
            skipped.push(format!("element {index} is not an object"));
        }
    }
    Ok(LoadOutcome { records, skipped })
}

fn string_field(raw: &Value, key: &str) -> String {
    match raw.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Null) | Some(Value::Array(_)) | Some(Value::Object(_)) | None => String::new(),
    }
}
