//! trigrid-core: domain model and collaborator contracts for the triage grid.

pub mod record;
pub mod source;
pub mod transform;

pub use record::{
    field_value, status_label, ColumnSpec, IncidentRecord, RecordPatch, COLUMNS, STATUS_OPTIONS,
};
pub use source::{LoadError, RecordSource, SearchError, UserCandidate, UserDirectory};
pub use transform::{record_from_raw, records_from_raw, LoadOutcome};

/// Stable crate label used by bootstrap smoke tests.
#[must_use]
pub fn crate_label() -> &'static str {
    "trigrid-core"
}
