use shoptrail::types::errors::*;

// === StorageError Tests ===

#[test]
fn storage_error_display() {
    let err = StorageError::Unavailable("disk full".to_string());
    assert_eq!(err.to_string(), "Storage unavailable: disk full");
}

#[test]
fn storage_error_converts_into_history_error() {
    let err: HistoryError = StorageError::Unavailable("locked".to_string()).into();
    assert!(matches!(err, HistoryError::StorageUnavailable(ref m) if m == "locked"));
    assert_eq!(err.to_string(), "History storage unavailable: locked");
}

#[test]
fn rusqlite_error_converts_into_storage_error() {
    let err: StorageError = rusqlite::Error::QueryReturnedNoRows.into();
    assert!(err.to_string().starts_with("Storage unavailable:"));
}

// === HistoryError Tests ===

#[test]
fn history_error_display_variants() {
    assert_eq!(
        HistoryError::Serialization("expected value".to_string()).to_string(),
        "History serialization error: expected value"
    );
    assert_eq!(
        HistoryError::InvalidEvent("click event requires a url".to_string()).to_string(),
        "Invalid history event: click event requires a url"
    );
}

#[test]
fn history_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> =
        Box::new(HistoryError::StorageUnavailable("io".to_string()));
    assert!(err.source().is_none());
}

// === SearchError Tests ===

#[test]
fn search_error_display_variants() {
    assert_eq!(SearchError::EmptyQuery.to_string(), "Search query is empty");
    assert_eq!(
        SearchError::MissingApiKey.to_string(),
        "Search API key is not configured"
    );
    assert_eq!(
        SearchError::Network("timed out".to_string()).to_string(),
        "Search network error: timed out"
    );
    assert_eq!(
        SearchError::Api {
            status: 429,
            message: "Too many requests".to_string()
        }
        .to_string(),
        "Search API error (429): Too many requests"
    );
    assert_eq!(
        SearchError::Parse("EOF".to_string()).to_string(),
        "Search response parse error: EOF"
    );
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("denied".to_string()).to_string(),
        "Settings I/O error: denied"
    );
    assert_eq!(
        SettingsError::SerializationError("bad json".to_string()).to_string(),
        "Settings serialization error: bad json"
    );
    assert_eq!(
        SettingsError::InvalidKey("a.b".to_string()).to_string(),
        "Invalid settings key: a.b"
    );
    assert_eq!(
        SettingsError::InvalidValue("not a number".to_string()).to_string(),
        "Invalid settings value: not a number"
    );
}
