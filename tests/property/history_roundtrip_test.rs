//! Property-based tests for the persisted history format.
//!
//! Serializing any well-formed log and parsing it back yields an equal
//! sequence of events.

use proptest::prelude::*;
use shoptrail::managers::activity_log::{decode_log, encode_log};
use shoptrail::types::history::HistoryEvent;

fn arb_event() -> impl Strategy<Value = HistoryEvent> {
    prop_oneof![
        (any::<String>(), any::<u64>()).prop_map(|(v, ts)| HistoryEvent::search(v, ts)),
        (any::<String>(), "https://[a-z]{1,12}\\.com/[a-z0-9/]{0,12}", any::<u64>())
            .prop_map(|(v, u, ts)| HistoryEvent::click(v, u, ts)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn history_log_roundtrip(events in prop::collection::vec(arb_event(), 0..16)) {
        let encoded = encode_log(&events).expect("encoding must succeed");
        let decoded = decode_log(&encoded).expect("decoding must succeed");
        prop_assert_eq!(decoded, events);
    }

    #[test]
    fn encoded_events_use_stored_field_names(event in arb_event()) {
        let encoded = encode_log(std::slice::from_ref(&event)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        let obj = json[0].as_object().unwrap();

        prop_assert!(obj.contains_key("type"));
        prop_assert!(obj.contains_key("value"));
        prop_assert!(obj.contains_key("timestamp"));
        prop_assert_eq!(obj.contains_key("url"), event.url.is_some());
    }
}
