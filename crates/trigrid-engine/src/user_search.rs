//! Assignee-picker search gating: minimum query length plus trailing
//! debounce in front of the user directory collaborator.
//!
//! Directory failures are swallowed: the picker degrades to an empty
//! suggestion list and the warning is retained for whoever cares to show
//! it.

use trigrid_core::source::{SearchError, UserCandidate, MIN_QUERY_LEN};

use crate::debounce::{Debouncer, DEFAULT_DEBOUNCE_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchGate {
    /// Below the minimum length: no call will be made and any pending one
    /// was cancelled.
    TooShort,
    /// Query accepted; it becomes due once the debounce window elapses.
    Scheduled,
}

#[derive(Debug, Default)]
pub struct UserSearchModel {
    debouncer: Debouncer<String>,
    suggestions: Vec<UserCandidate>,
    last_warning: Option<String>,
}

impl UserSearchModel {
    #[must_use]
    pub fn new(delay_ms: u64) -> Self {
        Self {
            debouncer: Debouncer::new(delay_ms),
            suggestions: Vec::new(),
            last_warning: None,
        }
    }

    #[must_use]
    pub fn with_default_delay() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }

    /// Feed one keystroke's worth of input. Sub-minimum queries
    /// short-circuit: suggestions clear and no directory call happens.
    pub fn input(&mut self, raw: &str, now_ms: u64) -> SearchGate {
        let query = raw.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            self.debouncer.cancel();
            self.suggestions.clear();
            return SearchGate::TooShort;
        }
        self.debouncer.schedule(query.to_owned(), now_ms);
        SearchGate::Scheduled
    }

    /// The debounced query ready to send to the directory, if its window
    /// has elapsed with no newer input. At most one call per burst.
    pub fn due_query(&mut self, now_ms: u64) -> Option<String> {
        self.debouncer.poll(now_ms)
    }

    /// Install a directory response. Last write wins: overlapping
    /// responses are not sequenced, so a slow early response landing after
    /// a later one overwrites it with stale data (accepted issue).
    pub fn apply_result(&mut self, result: Result<Vec<UserCandidate>, SearchError>) {
        match result {
            Ok(candidates) => {
                self.suggestions = candidates;
                self.last_warning = None;
            }
            Err(error) => {
                self.suggestions.clear();
                self.last_warning = Some(error.to_string());
            }
        }
    }

    #[must_use]
    pub fn suggestions(&self) -> &[UserCandidate] {
        &self.suggestions
    }

    #[must_use]
    pub fn last_warning(&self) -> Option<&str> {
        self.last_warning.as_deref()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use trigrid_core::source::{SearchError, UserCandidate};

    use super::{SearchGate, UserSearchModel};

    fn candidate(identifier: &str, display_name: &str) -> UserCandidate {
        UserCandidate {
            identifier: identifier.to_owned(),
            display_name: display_name.to_owned(),
        }
    }

    #[test]
    fn sub_minimum_input_issues_no_call() {
        let mut model = UserSearchModel::new(300);
        assert_eq!(model.input("d", 0), SearchGate::TooShort);
        assert_eq!(model.input("da", 100), SearchGate::TooShort);
        assert_eq!(model.due_query(10_000), None);
    }

    #[test]
    fn third_character_issues_one_call_for_the_latest_string() {
        let mut model = UserSearchModel::new(300);
        assert_eq!(model.input("d", 0), SearchGate::TooShort);
        assert_eq!(model.input("da", 100), SearchGate::TooShort);
        assert_eq!(model.input("dan", 200), SearchGate::Scheduled);

        assert_eq!(model.due_query(400), None);
        assert_eq!(model.due_query(500), Some("dan".to_owned()));
        assert_eq!(model.due_query(800), None);
    }

    #[test]
    fn shrinking_below_minimum_cancels_and_clears() {
        let mut model = UserSearchModel::new(300);
        model.apply_result(Ok(vec![candidate("u1", "Dana")]));
        assert_eq!(model.input("dan", 0), SearchGate::Scheduled);
        assert_eq!(model.input("da", 100), SearchGate::TooShort);
        assert!(model.suggestions().is_empty());
        assert_eq!(model.due_query(10_000), None);
        assert!(!model.is_pending());
    }

    #[test]
    fn failure_degrades_to_empty_suggestions_with_warning() {
        let mut model = UserSearchModel::new(300);
        model.apply_result(Ok(vec![candidate("u1", "Dana")]));
        assert_eq!(model.suggestions().len(), 1);

        model.apply_result(Err(SearchError::Unreachable("timeout".to_owned())));
        assert!(model.suggestions().is_empty());
        assert_eq!(
            model.last_warning(),
            Some("user directory unreachable: timeout")
        );

        model.apply_result(Ok(vec![candidate("u2", "Daniel")]));
        assert_eq!(model.last_warning(), None);
    }

    #[test]
    fn input_is_trimmed_before_gating() {
        let mut model = UserSearchModel::new(300);
        assert_eq!(model.input("  da  ", 0), SearchGate::TooShort);
        assert_eq!(model.input("  dan  ", 0), SearchGate::Scheduled);
        assert_eq!(model.due_query(300), Some("dan".to_owned()));
    }
}
