//! Property-based tests for ActivityLog operations.
//!
//! These tests verify that any sequence of searches and clicks recorded one at
//! a time is read back exactly in append order, that clear always empties the
//! log, and that the display projection is a descending permutation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use proptest::prelude::*;
use shoptrail::database::Database;
use shoptrail::managers::activity_log::{display_order, ActivityLog, ActivityLogTrait};
use shoptrail::types::history::{HistoryEvent, HistoryEventKind};

#[derive(Debug, Clone)]
enum Action {
    Search(String),
    Click(String, String),
}

/// Strategy for generating valid URL strings.
fn arb_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("https"), Just("http")],
        "[a-z][a-z0-9]{2,15}",
        prop_oneof![Just(".com"), Just(".org"), Just(".net")],
        proptest::option::of("/[a-z0-9]{1,10}"),
    )
        .prop_map(|(scheme, host, tld, path)| {
            format!("{}://{}{}{}", scheme, host, tld, path.unwrap_or_default())
        })
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        "[a-zA-Z0-9 ]{1,24}".prop_map(Action::Search),
        ("[a-zA-Z][a-zA-Z0-9 ]{0,30}", arb_url()).prop_map(|(t, u)| Action::Click(t, u)),
    ]
}

fn fresh_log() -> ActivityLog<Database> {
    let tick = Arc::new(AtomicU64::new(0));
    ActivityLog::new(Database::open_in_memory().expect("Failed to open in-memory database"))
        .with_clock(move || tick.fetch_add(1, Ordering::SeqCst))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn sequential_appends_read_back_in_order(actions in prop::collection::vec(arb_action(), 0..20)) {
        let log = fresh_log();
        for action in &actions {
            match action {
                Action::Search(q) => { log.record_search(q).unwrap(); }
                Action::Click(t, u) => { log.record_click(t, u).unwrap(); }
            }
        }

        let events = log.load_all();
        prop_assert_eq!(events.len(), actions.len());
        for (event, action) in events.iter().zip(&actions) {
            match action {
                Action::Search(q) => {
                    prop_assert_eq!(event.kind, HistoryEventKind::Search);
                    prop_assert_eq!(&event.value, q);
                    prop_assert!(event.url.is_none());
                }
                Action::Click(t, u) => {
                    prop_assert_eq!(event.kind, HistoryEventKind::Click);
                    prop_assert_eq!(&event.value, t);
                    prop_assert_eq!(event.url.as_ref(), Some(u));
                }
            }
        }
    }

    #[test]
    fn clear_then_load_is_empty(actions in prop::collection::vec(arb_action(), 0..10)) {
        let log = fresh_log();
        for action in &actions {
            match action {
                Action::Search(q) => { log.record_search(q).unwrap(); }
                Action::Click(t, u) => { log.record_click(t, u).unwrap(); }
            }
        }
        log.clear().unwrap();
        prop_assert!(log.load_all().is_empty());
    }

    #[test]
    fn display_order_is_descending_permutation(timestamps in prop::collection::vec(0u64..1_000, 0..30)) {
        let events: Vec<HistoryEvent> = timestamps
            .iter()
            .enumerate()
            .map(|(i, ts)| HistoryEvent::search(format!("q{}", i), *ts))
            .collect();

        let shown = display_order(&events);
        prop_assert_eq!(shown.len(), events.len());
        prop_assert!(shown.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));

        let mut a: Vec<u64> = shown.iter().map(|e| e.timestamp).collect();
        let mut b = timestamps.clone();
        a.sort_unstable();
        b.sort_unstable();
        prop_assert_eq!(a, b);
    }
}
