//! Per-column filter criteria and their application.
//!
//! Two constraint kinds: a case-folded substring match for free-text
//! columns and an exact accepted-value set for enum-like columns (owner,
//! exception, status). Absence of a column key means no constraint, and an
//! empty value set means no constraint rather than match-nothing.

use std::collections::{BTreeMap, BTreeSet};

use trigrid_core::record::{field_value, IncidentRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnFilter {
    /// Lowercased substring matched against the folded field value.
    Contains(String),
    /// Exact membership test against the stringified field value.
    AnyOf(BTreeSet<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSet {
    constraints: BTreeMap<String, ColumnFilter>,
}

impl FilterSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim + fold the raw text; an empty result removes any existing
    /// constraint for the column.
    pub fn set_text_filter(&mut self, column_key: &str, raw_value: &str) {
        let folded = raw_value.trim().to_ascii_lowercase();
        if folded.is_empty() {
            self.constraints.remove(column_key);
        } else {
            self.constraints
                .insert(column_key.to_owned(), ColumnFilter::Contains(folded));
        }
    }

    /// Exact-match set constraint. An empty set removes the constraint.
    pub fn set_values_filter(&mut self, column_key: &str, accepted: &[String]) {
        let values: BTreeSet<String> = accepted.iter().cloned().collect();
        if values.is_empty() {
            self.constraints.remove(column_key);
        } else {
            self.constraints
                .insert(column_key.to_owned(), ColumnFilter::AnyOf(values));
        }
    }

    pub fn clear(&mut self) {
        self.constraints.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    #[must_use]
    pub fn active_columns(&self) -> Vec<&str> {
        self.constraints.keys().map(String::as_str).collect()
    }

    /// Keep only records satisfying every active constraint. Constraints
    /// on different columns commute; evaluation order never matters.
    #[must_use]
    pub fn apply(&self, records: &[IncidentRecord]) -> Vec<IncidentRecord> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn matches(&self, record: &IncidentRecord) -> bool {
        self.constraints.iter().all(|(column_key, constraint)| {
            // Unknown column keys carry no reachable field: no-op.
            let Some(value) = field_value(record, column_key) else {
                return true;
            };
            match constraint {
                ColumnFilter::Contains(needle) => value.to_ascii_lowercase().contains(needle),
                ColumnFilter::AnyOf(accepted) => accepted.contains(value),
            }
        })
    }
}
