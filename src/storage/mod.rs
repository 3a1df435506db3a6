//! Persistence boundary: an opaque string-keyed store plus the typed
//! [`BudgetStore`] that maps [`BudgetState`] onto its four logical keys.

pub mod backup;
pub mod json_backend;
pub mod memory;

use crate::domain::{BudgetState, Settings, Transaction};
use crate::errors::{BudgetError, Result};

pub use backup::{export_data, import_data, BACKUP_VERSION};
pub use json_backend::JsonFileStore;
pub use memory::MemoryStore;

pub const BALANCE_KEY: &str = "balance";
pub const TRANSACTIONS_KEY: &str = "transactions";
pub const SETTINGS_KEY: &str = "settings";
pub const PERIOD_KEY: &str = "periodKey";

/// Abstraction over get/set/clear key-value persistence backends.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
    fn clear(&mut self) -> Result<()>;

    /// Removes `removals`, then writes `upserts`. Backends that can commit in
    /// one step should override this so a save never leaves a half-written
    /// state behind.
    fn write_batch(&mut self, upserts: &[(&str, String)], removals: &[&str]) -> Result<()> {
        for key in removals {
            self.remove(key)?;
        }
        for (key, value) in upserts {
            self.set(key, value)?;
        }
        Ok(())
    }
}

/// Typed access to the budget state held in a [`KeyValueStore`].
pub struct BudgetStore {
    backend: Box<dyn KeyValueStore>,
}

impl BudgetStore {
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &dyn KeyValueStore {
        self.backend.as_ref()
    }

    /// Reads the persisted state, falling back to defaults for absent keys.
    pub fn load(&self) -> Result<BudgetState> {
        let balance = match self.backend.get(BALANCE_KEY)? {
            Some(raw) => parse_balance(&raw)?,
            None => 0.0,
        };
        let transactions: Vec<Transaction> = match self.backend.get(TRANSACTIONS_KEY)? {
            Some(raw) => decode(TRANSACTIONS_KEY, &raw)?,
            None => Vec::new(),
        };
        let settings: Settings = match self.backend.get(SETTINGS_KEY)? {
            Some(raw) => decode(SETTINGS_KEY, &raw)?,
            None => Settings::default(),
        };
        if !settings.is_valid() {
            return Err(BudgetError::Storage(format!(
                "stored start day {} is out of range",
                settings.start_day
            )));
        }
        let period_key = self.backend.get(PERIOD_KEY)?;

        Ok(BudgetState {
            balance,
            transactions,
            settings,
            period_key,
        })
    }

    /// Persists every key of `state`. A missing period key is removed from the store.
    pub fn save(&mut self, state: &BudgetState) -> Result<()> {
        let mut upserts = vec![
            (BALANCE_KEY, state.balance.to_string()),
            (TRANSACTIONS_KEY, serde_json::to_string(&state.transactions)?),
            (SETTINGS_KEY, serde_json::to_string(&state.settings)?),
        ];
        let mut removals = Vec::new();
        match &state.period_key {
            Some(key) => upserts.push((PERIOD_KEY, key.clone())),
            None => removals.push(PERIOD_KEY),
        }
        self.backend.write_batch(&upserts, &removals)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.backend.clear()
    }
}

fn parse_balance(raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| BudgetError::Storage(format!("stored balance `{raw}` is not a number")))
}

fn decode<T: serde::de::DeserializeOwned>(key: &str, raw: &str) -> Result<T> {
    serde_json::from_str(raw)
        .map_err(|err| BudgetError::Storage(format!("stored `{key}` is unreadable: {err}")))
}
