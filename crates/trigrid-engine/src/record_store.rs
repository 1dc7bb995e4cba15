//! Authoritative in-memory incident list.
//!
//! The full list is installed wholesale on initial load; edits merge
//! field patches in place without ever touching `id`. Every mutating call
//! notifies subscribers with the full current list before returning.

use trigrid_core::record::{IncidentRecord, RecordPatch};

use crate::pubsub::{Callback, Subscribers, SubscriptionId};

#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<IncidentRecord>,
    subscribers: Subscribers<Vec<IncidentRecord>>,
}

impl RecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a new list, wholly replacing the previous one.
    pub fn replace_all(&mut self, records: Vec<IncidentRecord>) {
        self.records = records;
        let snapshot = self.records.clone();
        self.subscribers.notify(&snapshot);
    }

    /// Defensive copy; callers never observe later mutation through it.
    #[must_use]
    pub fn get_all(&self) -> Vec<IncidentRecord> {
        self.records.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Merge `patch` into the record with `id`. An unknown id is a silent
    /// no-op: no mutation, no notification, returns false.
    pub fn update_one(&mut self, id: &str, patch: &RecordPatch) -> bool {
        let Some(record) = self.records.iter_mut().find(|record| record.id == id) else {
            return false;
        };
        patch.apply_to(record);
        let snapshot = self.records.clone();
        self.subscribers.notify(&snapshot);
        true
    }

    /// Merge `patch` into every record whose id is listed. Notifies
    /// whenever the store is non-empty, even when zero ids matched
    /// (preserved upstream behavior).
    pub fn update_many(&mut self, ids: &[String], patch: &RecordPatch) -> usize {
        let mut matched = 0;
        for record in &mut self.records {
            if ids.iter().any(|id| *id == record.id) {
                patch.apply_to(record);
                matched += 1;
            }
        }
        if !self.records.is_empty() {
            let snapshot = self.records.clone();
            self.subscribers.notify(&snapshot);
        }
        matched
    }

    pub fn subscribe(&mut self, callback: Callback<Vec<IncidentRecord>>) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}
