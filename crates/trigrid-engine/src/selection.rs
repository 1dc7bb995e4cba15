//! Selected record ids, independent of filter/sort/page state.
//!
//! Pure set membership: selection survives every pipeline change and is
//! never auto-pruned when records leave the store. Only `clear` (or the
//! select-all checkbox going false) empties it.

use std::collections::BTreeSet;

use crate::pubsub::{Callback, Subscribers, SubscriptionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub ids: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Default)]
pub struct SelectionStore {
    selected: BTreeSet<String>,
    subscribers: Subscribers<SelectionSnapshot>,
}

impl SelectionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of one id.
    pub fn toggle(&mut self, id: &str) -> SelectionSnapshot {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_owned());
        }
        self.notify()
    }

    /// Select-all checkbox semantics: `true` adds every given id (ids not
    /// listed are untouched); `false` clears the ENTIRE set no matter
    /// which ids were passed. The asymmetry is deliberate upstream
    /// behavior, preserved here.
    pub fn set_all(&mut self, ids: &[String], selected: bool) -> SelectionSnapshot {
        if selected {
            for id in ids {
                self.selected.insert(id.clone());
            }
        } else {
            self.selected.clear();
        }
        self.notify()
    }

    pub fn clear(&mut self) -> SelectionSnapshot {
        self.selected.clear();
        self.notify()
    }

    /// Defensive copy of the selected id set.
    #[must_use]
    pub fn selected(&self) -> BTreeSet<String> {
        self.selected.clone()
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn subscribe(&mut self, callback: Callback<SelectionSnapshot>) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn notify(&mut self) -> SelectionSnapshot {
        let snapshot = SelectionSnapshot {
            ids: self.selected.iter().cloned().collect(),
            count: self.selected.len(),
        };
        self.subscribers.notify(&snapshot);
        snapshot
    }
}
