//! App Core for ShopTrail.
//!
//! Central struct holding the activity log, settings and the product search
//! client.

use std::fs;
use std::sync::Arc;

use tracing::info;

use crate::database::connection::Database;
use crate::managers::activity_log::ActivityLog;
use crate::services::product_search::ProductSearchClient;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};

/// Central application struct. Each screen-facing operation goes through it.
pub struct App {
    pub activity_log: ActivityLog<Arc<Database>>,
    pub settings_engine: SettingsEngine,
    pub product_search: ProductSearchClient,
}

impl App {
    /// Creates an App from an already prepared settings engine.
    pub fn with_settings_engine(
        db_path: &str,
        settings_engine: SettingsEngine,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);
        let activity_log = ActivityLog::new(db);
        let product_search =
            ProductSearchClient::from_settings(&settings_engine.get_settings().search)?;

        info!(db_path, "app initialized");

        Ok(Self {
            activity_log,
            settings_engine,
            product_search,
        })
    }

    /// Opens the App at the database location named by the settings,
    /// creating the data directory when needed.
    pub fn open(settings_engine: SettingsEngine) -> Result<Self, Box<dyn std::error::Error>> {
        let db_path = settings_engine.database_path();
        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let db_path = db_path.to_string_lossy().to_string();
        Self::with_settings_engine(&db_path, settings_engine)
    }

    /// Rebuilds the search client after search settings changed.
    pub fn reload_search_client(&mut self) -> Result<(), crate::types::errors::SearchError> {
        self.product_search =
            ProductSearchClient::from_settings(&self.settings_engine.get_settings().search)?;
        Ok(())
    }
}
