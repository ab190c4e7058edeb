use thiserror::Error;

// === StorageError ===

/// Errors raised by a key-value storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store could not be read or written.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::Unavailable(err.to_string())
    }
}

// === HistoryError ===

/// Errors related to the activity history log.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The underlying key-value store failed.
    #[error("History storage unavailable: {0}")]
    StorageUnavailable(String),
    /// The stored log could not be encoded or decoded.
    #[error("History serialization error: {0}")]
    Serialization(String),
    /// The event would violate a log invariant and was not recorded.
    #[error("Invalid history event: {0}")]
    InvalidEvent(String),
}

impl From<StorageError> for HistoryError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Unavailable(msg) => HistoryError::StorageUnavailable(msg),
        }
    }
}

// === SearchError ===

/// Errors related to the product search client.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The query was empty after trimming.
    #[error("Search query is empty")]
    EmptyQuery,
    /// No API key is configured for the search provider.
    #[error("Search API key is not configured")]
    MissingApiKey,
    /// The request could not be sent or the response could not be read.
    #[error("Search network error: {0}")]
    Network(String),
    /// The provider answered with a non-success status.
    #[error("Search API error ({status}): {message}")]
    Api { status: u16, message: String },
    /// The response body was not valid JSON.
    #[error("Search response parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::Network(err.to_string())
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The provided settings key is invalid.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The provided settings value is invalid.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}
