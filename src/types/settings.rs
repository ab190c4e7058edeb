use serde::{Deserialize, Serialize};

/// Top-level application settings container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    pub storage: StorageSettings,
    pub search: SearchSettings,
    pub logging: LoggingSettings,
}

/// Where local state is kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageSettings {
    /// Overrides the platform data directory when set.
    pub data_dir: Option<String>,
    pub database_file: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: None,
            database_file: "shoptrail.db".to_string(),
        }
    }
}

/// Third-party product search API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchSettings {
    pub api_host: String,
    pub api_key: String,
    pub country: String,
    pub page: u32,
    pub timeout_secs: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            api_host: "real-time-amazon-data.p.rapidapi.com".to_string(),
            api_key: String::new(),
            country: "US".to_string(),
            page: 1,
            timeout_secs: 15,
        }
    }
}

/// Log output settings; `RUST_LOG` takes precedence when set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
