use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use super::KeyValueStore;
use crate::errors::{BudgetError, Result};
use crate::utils::persistence;

/// Filesystem-backed key-value store kept as a single JSON object.
///
/// Every write stages the whole object to a sibling temp file and renames it
/// over the target, so readers never observe a partially written file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store at `path`, starting empty when the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let data = fs::read_to_string(&path)?;
            serde_json::from_str(&data).map_err(|err| {
                BudgetError::Storage(format!("store `{}` is unreadable: {err}", path.display()))
            })?
        } else {
            BTreeMap::new()
        };
        tracing::debug!(path = %path.display(), keys = entries.len(), "opened json store");
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        persistence::write_atomic(&self.path, &json)?;
        Ok(())
    }

    fn commit(&mut self, next: BTreeMap<String, String>) -> Result<()> {
        let previous = std::mem::replace(&mut self.entries, next);
        if let Err(err) = self.flush() {
            self.entries = previous;
            return Err(err);
        }
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut next = self.entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.commit(next)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        let mut next = self.entries.clone();
        next.remove(key);
        self.commit(next)
    }

    fn clear(&mut self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        self.entries.clear();
        Ok(())
    }

    fn write_batch(&mut self, upserts: &[(&str, String)], removals: &[&str]) -> Result<()> {
        let mut next = self.entries.clone();
        for key in removals {
            next.remove(*key);
        }
        for (key, value) in upserts {
            next.insert((*key).to_string(), value.clone());
        }
        if next == self.entries {
            return Ok(());
        }
        self.commit(next)
    }
}
