//! Assignee search against a fake directory: minimum-length gating and
//! one-call-per-burst debouncing.

use std::cell::RefCell;

use trigrid_core::source::{SearchError, UserCandidate, UserDirectory};
use trigrid_engine::user_search::{SearchGate, UserSearchModel};

#[derive(Debug, Default)]
struct RecordingDirectory {
    queries: RefCell<Vec<String>>,
    fail: bool,
}

impl UserDirectory for RecordingDirectory {
    fn search(&self, query: &str) -> Result<Vec<UserCandidate>, SearchError> {
        self.queries.borrow_mut().push(query.to_owned());
        if self.fail {
            return Err(SearchError::Unreachable("boom".to_owned()));
        }
        Ok(vec![UserCandidate {
            identifier: "u-1".to_owned(),
            display_name: format!("{query} person"),
        }])
    }
}

fn pump(model: &mut UserSearchModel, directory: &RecordingDirectory, now_ms: u64) {
    if let Some(query) = model.due_query(now_ms) {
        model.apply_result(directory.search(&query));
    }
}

#[test]
fn typing_burst_issues_exactly_one_call_for_the_latest_string() {
    let directory = RecordingDirectory::default();
    let mut model = UserSearchModel::new(300);

    // Two sub-threshold keystrokes: no scheduling at all.
    assert_eq!(model.input("d", 0), SearchGate::TooShort);
    pump(&mut model, &directory, 500);
    assert_eq!(model.input("da", 600), SearchGate::TooShort);
    pump(&mut model, &directory, 1_100);
    assert!(directory.queries.borrow().is_empty());

    // Third character crosses the threshold; more typing inside the
    // window keeps rescheduling.
    assert_eq!(model.input("dan", 1_200), SearchGate::Scheduled);
    pump(&mut model, &directory, 1_400);
    assert_eq!(model.input("dana", 1_450), SearchGate::Scheduled);
    pump(&mut model, &directory, 1_600);
    assert!(directory.queries.borrow().is_empty());

    // Window elapses with no further input: one call, latest string.
    pump(&mut model, &directory, 1_750);
    assert_eq!(*directory.queries.borrow(), vec!["dana".to_owned()]);
    assert_eq!(model.suggestions().len(), 1);
    assert_eq!(model.suggestions()[0].display_name, "dana person");

    // Nothing left pending afterwards.
    pump(&mut model, &directory, 5_000);
    assert_eq!(directory.queries.borrow().len(), 1);
}

#[test]
fn directory_failure_is_swallowed_into_empty_suggestions() {
    let directory = RecordingDirectory {
        fail: true,
        ..RecordingDirectory::default()
    };
    let mut model = UserSearchModel::new(300);

    assert_eq!(model.input("dan", 0), SearchGate::Scheduled);
    pump(&mut model, &directory, 300);

    assert!(model.suggestions().is_empty());
    assert_eq!(
        model.last_warning(),
        Some("user directory unreachable: boom")
    );
}
