//! Activity log for ShopTrail.
//!
//! Implements `ActivityLogTrait` — an append-only journal of search and click
//! events stored as one JSON array under a single key of a [`KeyValueStore`].
//! Appends are read-modify-write of the whole array. Every log bound to the
//! same key shares one process-wide mutex, so concurrent appends do not
//! overwrite each other even across separate `ActivityLog` values.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, warn};

use crate::database::KeyValueStore;
use crate::types::errors::HistoryError;
use crate::types::history::{HistoryEvent, HistoryRow, UNTITLED_PLACEHOLDER};

/// Storage key holding the serialized log.
pub const HISTORY_KEY: &str = "user_history";

/// Source of event timestamps, in milliseconds since the UNIX epoch.
pub type Clock = Box<dyn Fn() -> u64 + Send + Sync>;

static KEY_LOCKS: OnceLock<Mutex<HashMap<String, Arc<Mutex<()>>>>> = OnceLock::new();

/// Returns the write lock for a storage key. Keyed by name only, so logs on
/// different stores with the same key serialize needlessly but safely.
fn key_lock(key: &str) -> Arc<Mutex<()>> {
    let mut locks = KEY_LOCKS
        .get_or_init(|| Mutex::new(HashMap::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    locks.entry(key.to_string()).or_default().clone()
}

/// Trait defining activity log operations.
pub trait ActivityLogTrait {
    fn record_search(&self, query: &str) -> Result<HistoryEvent, HistoryError>;
    fn record_click(&self, title: &str, url: &str) -> Result<HistoryEvent, HistoryError>;
    fn load_all(&self) -> Vec<HistoryEvent>;
    fn try_load_all(&self) -> Result<Vec<HistoryEvent>, HistoryError>;
    fn clear(&self) -> Result<(), HistoryError>;
}

/// Activity log backed by any key-value store.
pub struct ActivityLog<S: KeyValueStore> {
    store: S,
    key: String,
    write_lock: Arc<Mutex<()>>,
    clock: Clock,
}

impl<S: KeyValueStore> ActivityLog<S> {
    /// Creates a log stored under [`HISTORY_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, HISTORY_KEY)
    }

    /// Creates a log stored under a custom key.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            write_lock: key_lock(&key),
            store,
            key,
            clock: Box::new(now_millis),
        }
    }

    /// Replaces the timestamp source.
    pub fn with_clock(mut self, clock: impl Fn() -> u64 + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Appends one event by rewriting the whole stored sequence. Stored
    /// records are carried over as they are, malformed ones included.
    ///
    /// On any failure the persisted log is left as it was.
    fn append(&self, event: HistoryEvent) -> Result<HistoryEvent, HistoryError> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut events = self.read_stored()?;
        events.push(event.clone());
        let encoded = encode_log(&events)?;
        self.store.set(&self.key, &encoded)?;

        debug!(
            key = %self.key,
            kind = ?event.kind,
            total = events.len(),
            "history event recorded"
        );
        Ok(event)
    }

    fn read_stored(&self) -> Result<Vec<HistoryEvent>, HistoryError> {
        match self.store.get(&self.key)? {
            Some(raw) => decode_log(&raw),
            None => Ok(Vec::new()),
        }
    }
}

impl<S: KeyValueStore> ActivityLogTrait for ActivityLog<S> {
    /// Records a submitted search query.
    fn record_search(&self, query: &str) -> Result<HistoryEvent, HistoryError> {
        let event = HistoryEvent::search(query, (self.clock)());
        self.append(event)
    }

    /// Records an opened search result. An empty title is stored as a
    /// placeholder; an empty url is rejected.
    fn record_click(&self, title: &str, url: &str) -> Result<HistoryEvent, HistoryError> {
        if url.trim().is_empty() {
            return Err(HistoryError::InvalidEvent(
                "click event requires a url".to_string(),
            ));
        }
        let title = if title.trim().is_empty() {
            UNTITLED_PLACEHOLDER
        } else {
            title
        };
        let event = HistoryEvent::click(title, url, (self.clock)());
        self.append(event)
    }

    /// Returns every well-formed event in append order. A missing or
    /// unparseable log reads as empty.
    fn load_all(&self) -> Vec<HistoryEvent> {
        match self.try_load_all() {
            Ok(events) => events,
            Err(e) => {
                warn!(key = %self.key, error = %e, "history unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Like `load_all`, but surfaces storage and decoding failures. Records
    /// breaking the url-iff-click rule are skipped.
    fn try_load_all(&self) -> Result<Vec<HistoryEvent>, HistoryError> {
        let stored = self.read_stored()?;
        let total = stored.len();
        let events: Vec<HistoryEvent> =
            stored.into_iter().filter(HistoryEvent::is_well_formed).collect();
        if events.len() < total {
            warn!(
                key = %self.key,
                skipped = total - events.len(),
                "malformed history records hidden"
            );
        }
        Ok(events)
    }

    /// Erases the log. Clearing an empty log succeeds.
    fn clear(&self) -> Result<(), HistoryError> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        self.store.remove(&self.key)?;
        debug!(key = %self.key, "history cleared");
        Ok(())
    }
}

/// Returns the current UNIX time in milliseconds.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Serializes a log as a JSON array.
pub fn encode_log(events: &[HistoryEvent]) -> Result<String, HistoryError> {
    serde_json::to_string(events).map_err(|e| HistoryError::Serialization(e.to_string()))
}

/// Parses a stored log. Only the JSON shape is checked here; see
/// [`HistoryEvent::is_well_formed`] for the url-iff-click rule.
pub fn decode_log(raw: &str) -> Result<Vec<HistoryEvent>, HistoryError> {
    serde_json::from_str(raw).map_err(|e| HistoryError::Serialization(e.to_string()))
}

/// Most recent first. Events with equal timestamps keep append order.
pub fn display_order(events: &[HistoryEvent]) -> Vec<HistoryEvent> {
    let mut sorted = events.to_vec();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted
}

/// Builds the rows rendered by the history screen, in display order.
pub fn history_rows(events: &[HistoryEvent]) -> Vec<HistoryRow> {
    display_order(events)
        .into_iter()
        .enumerate()
        .map(|(key, event)| HistoryRow {
            key,
            kind: event.kind,
            label: event.kind.label(),
            value: event.value,
            url: event.url,
            timestamp: event.timestamp,
        })
        .collect()
}
