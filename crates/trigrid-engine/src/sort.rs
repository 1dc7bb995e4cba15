//! Single-column sort with direction toggling.
//!
//! The comparator folds both stringified values to ASCII lowercase and
//! compares by code point. `sort_by` is stable, so equal keys keep their
//! incoming relative order, which keeps tests deterministic.

use trigrid_core::record::{field_value, IncidentRecord};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    column: Option<String>,
    ascending: bool,
}

impl SortState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Header-click rule: the same column flips direction; a different
    /// column becomes active and resets to ascending.
    pub fn toggle(&mut self, column_key: &str) {
        if self.column.as_deref() == Some(column_key) {
            self.ascending = !self.ascending;
        } else {
            self.column = Some(column_key.to_owned());
            self.ascending = true;
        }
    }

    #[must_use]
    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    #[must_use]
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// Back to "no active sort": `apply` returns input order.
    pub fn reset(&mut self) {
        self.column = None;
        self.ascending = false;
    }

    /// Produce a new ordered sequence; the input is never mutated. With no
    /// active column the input order is returned as-is.
    #[must_use]
    pub fn apply(&self, records: &[IncidentRecord]) -> Vec<IncidentRecord> {
        let mut sorted = records.to_vec();
        let Some(column_key) = self.column.as_deref() else {
            return sorted;
        };
        sorted.sort_by(|left, right| {
            let ordering = fold_key(left, column_key).cmp(&fold_key(right, column_key));
            if self.ascending {
                ordering
            } else {
                ordering.reverse()
            }
        });
        sorted
    }
}

fn fold_key(record: &IncidentRecord, column_key: &str) -> String {
    field_value(record, column_key)
        .unwrap_or("")
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use trigrid_core::record::IncidentRecord;

    use super::SortState;

    fn record(id: &str, owner: &str) -> IncidentRecord {
        IncidentRecord {
            id: id.to_owned(),
            owner: owner.to_owned(),
            ..IncidentRecord::default()
        }
    }

    fn owners(records: &[IncidentRecord]) -> Vec<&str> {
        records.iter().map(|record| record.owner.as_str()).collect()
    }

    #[test]
    fn no_active_column_keeps_input_order() {
        let records = vec![record("a", "zoe"), record("b", "amir")];
        let sort = SortState::new();
        assert_eq!(sort.apply(&records), records);
    }

    #[test]
    fn sorting_folds_case() {
        let records = vec![record("a", "Zoe"), record("b", "amir"), record("c", "Mia")];
        let mut sort = SortState::new();
        sort.toggle("owner");
        assert_eq!(owners(&sort.apply(&records)), vec!["amir", "Mia", "Zoe"]);
    }

    #[test]
    fn same_column_double_sort_mirrors_distinct_keys() {
        let records = vec![record("a", "zoe"), record("b", "amir"), record("c", "mia")];
        let mut sort = SortState::new();
        sort.toggle("owner");
        let ascending = sort.apply(&records);
        sort.toggle("owner");
        let descending = sort.apply(&records);

        let mut mirrored = ascending.clone();
        mirrored.reverse();
        assert_eq!(descending, mirrored);
        assert!(!sort.is_ascending());
    }

    #[test]
    fn switching_column_resets_to_ascending() {
        let mut sort = SortState::new();
        sort.toggle("owner");
        sort.toggle("owner");
        assert!(!sort.is_ascending());
        sort.toggle("status");
        assert_eq!(sort.column(), Some("status"));
        assert!(sort.is_ascending());
    }

    #[test]
    fn equal_keys_keep_relative_order() {
        let records = vec![
            IncidentRecord {
                id: "a".to_owned(),
                status: "10".to_owned(),
                ..IncidentRecord::default()
            },
            IncidentRecord {
                id: "c".to_owned(),
                status: "10".to_owned(),
                ..IncidentRecord::default()
            },
        ];
        let mut sort = SortState::new();
        sort.toggle("status");
        let sorted = sort.apply(&records);
        let ids: Vec<&str> = sorted.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn reset_clears_the_active_sort() {
        let records = vec![record("a", "zoe"), record("b", "amir")];
        let mut sort = SortState::new();
        sort.toggle("owner");
        sort.reset();
        assert_eq!(sort.column(), None);
        assert_eq!(sort.apply(&records), records);
    }
}
