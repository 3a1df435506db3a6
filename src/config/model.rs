use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::utils::paths;

/// Engine preferences. Every field has a default so partial files load cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom data directory. Defaults to the application home.
    pub data_dir: Option<PathBuf>,
    /// File name of the key-value store inside the data directory.
    pub store_file: String,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Create transactions already settled when their date in the current
    /// period has passed.
    pub auto_settle_elapsed: bool,
    /// Title given to transactions entered without one.
    pub placeholder_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            store_file: "budget.json".into(),
            log_filter: "payday_budget=info".into(),
            auto_settle_elapsed: true,
            placeholder_title: "Untitled".into(),
        }
    }
}

impl AppConfig {
    pub fn resolve_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(paths::app_data_dir)
    }

    pub fn store_path(&self) -> PathBuf {
        self.resolve_data_dir().join(&self.store_file)
    }
}
