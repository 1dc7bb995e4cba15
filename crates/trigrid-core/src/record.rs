//! Incident record shape, column vocabulary, and field-wise patches.

use serde::{Deserialize, Serialize};

/// Status codes come from an external vocabulary; unknown codes are legal
/// and simply have no display label.
pub const STATUS_OPTIONS: [(&str, &str); 6] = [
    ("new", "New"),
    ("in-analysis", "In analysis"),
    ("in-progress", "In progress"),
    ("reassigned", "Reassigned"),
    ("waiting", "Waiting"),
    ("published", "Published"),
];

#[must_use]
pub fn status_label(code: &str) -> Option<&'static str> {
    STATUS_OPTIONS
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, label)| *label)
}

/// One incident as held by the record store.
///
/// `id` is assigned upstream, unique within a store's current list, and
/// never recomputed from mutable fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IncidentRecord {
    pub id: String,
    pub primary_key: String,
    pub owner: String,
    pub status: String,
    pub exception: String,
    pub comment: String,
    pub master_incident: String,
    pub bd_table: String,
    pub bd_table_attr: String,
}

/// Field-wise merge applied by single and bulk edits. Absent fields leave
/// the record untouched; a patch never carries `id`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordPatch {
    pub owner: Option<String>,
    pub status: Option<String>,
    pub exception: Option<String>,
    pub comment: Option<String>,
    pub master_incident: Option<String>,
    pub bd_table: Option<String>,
    pub bd_table_attr: Option<String>,
}

impl RecordPatch {
    pub fn apply_to(&self, record: &mut IncidentRecord) {
        if let Some(owner) = &self.owner {
            record.owner = owner.clone();
        }
        if let Some(status) = &self.status {
            record.status = status.clone();
        }
        if let Some(exception) = &self.exception {
            record.exception = exception.clone();
        }
        if let Some(comment) = &self.comment {
            record.comment = comment.clone();
        }
        if let Some(master_incident) = &self.master_incident {
            record.master_incident = master_incident.clone();
        }
        if let Some(bd_table) = &self.bd_table {
            record.bd_table = bd_table.clone();
        }
        if let Some(bd_table_attr) = &self.bd_table_attr {
            record.bd_table_attr = bd_table_attr.clone();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub key: &'static str,
    pub title: &'static str,
    pub default_width_px: u32,
    pub filterable: bool,
}

/// Grid column table, in display order. Keys match the raw wire names.
pub const COLUMNS: [ColumnSpec; 9] = [
    ColumnSpec {
        key: "id",
        title: "Id",
        default_width_px: 80,
        filterable: false,
    },
    ColumnSpec {
        key: "primaryKey",
        title: "Key",
        default_width_px: 120,
        filterable: true,
    },
    ColumnSpec {
        key: "owner",
        title: "Owner",
        default_width_px: 140,
        filterable: true,
    },
    ColumnSpec {
        key: "status",
        title: "Status",
        default_width_px: 110,
        filterable: true,
    },
    ColumnSpec {
        key: "exception",
        title: "Exception",
        default_width_px: 90,
        filterable: true,
    },
    ColumnSpec {
        key: "comment",
        title: "Comment",
        default_width_px: 200,
        filterable: true,
    },
    ColumnSpec {
        key: "masterIncident",
        title: "Master incident",
        default_width_px: 140,
        filterable: true,
    },
    ColumnSpec {
        key: "bdTable",
        title: "BD table",
        default_width_px: 130,
        filterable: true,
    },
    ColumnSpec {
        key: "bdTableAttr",
        title: "BD attribute",
        default_width_px: 130,
        filterable: true,
    },
];

/// Column-keyed field access. Unknown keys yield `None`; callers treat the
/// constraint as a no-op.
#[must_use]
pub fn field_value<'a>(record: &'a IncidentRecord, key: &str) -> Option<&'a str> {
    match key {
        "id" => Some(&record.id),
        "primaryKey" => Some(&record.primary_key),
        "owner" => Some(&record.owner),
        "status" => Some(&record.status),
        "exception" => Some(&record.exception),
        "comment" => Some(&record.comment),
        "masterIncident" => Some(&record.master_incident),
        "bdTable" => Some(&record.bd_table),
        "bdTableAttr" => Some(&record.bd_table_attr),
        _ => None,
    }
}
