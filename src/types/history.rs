use serde::{Deserialize, Serialize};

/// Title stored for a click when the caller has none.
pub const UNTITLED_PLACEHOLDER: &str = "No Title Available";

/// Shown by the history screen when the log is empty.
pub const EMPTY_HISTORY_TEXT: &str = "No history yet. Start searching and clicking on products!";

/// The kind of user action a history event records.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HistoryEventKind {
    Search,
    Click,
}

impl HistoryEventKind {
    /// Label rendered in front of the event value on the history screen.
    pub fn label(&self) -> &'static str {
        match self {
            HistoryEventKind::Search => "🔍 Searched:",
            HistoryEventKind::Click => "🛒 Viewed:",
        }
    }
}

/// A single logged user action. Immutable once appended to the log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryEvent {
    #[serde(rename = "type")]
    pub kind: HistoryEventKind,
    /// Search query for `Search`, result title for `Click`.
    pub value: String,
    /// Milliseconds since the UNIX epoch.
    pub timestamp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl HistoryEvent {
    pub fn search(query: impl Into<String>, timestamp: u64) -> Self {
        Self {
            kind: HistoryEventKind::Search,
            value: query.into(),
            timestamp,
            url: None,
        }
    }

    pub fn click(title: impl Into<String>, url: impl Into<String>, timestamp: u64) -> Self {
        Self {
            kind: HistoryEventKind::Click,
            value: title.into(),
            timestamp,
            url: Some(url.into()),
        }
    }

    /// A click carries a non-empty url; a search carries none.
    pub fn is_well_formed(&self) -> bool {
        match self.kind {
            HistoryEventKind::Search => self.url.is_none(),
            HistoryEventKind::Click => self.url.as_deref().is_some_and(|u| !u.is_empty()),
        }
    }
}

/// One rendered line of the history screen.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HistoryRow {
    /// Transient display key (position in the rendered list).
    pub key: usize,
    pub kind: HistoryEventKind,
    pub label: &'static str,
    pub value: String,
    /// Link target; only clicks are activatable.
    pub url: Option<String>,
    pub timestamp: u64,
}
