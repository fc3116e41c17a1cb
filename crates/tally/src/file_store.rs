//! JSON-file backed [`Store`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use derive_getters::Getters;
use tally_core::{Store, StoreError};
use tracing::{debug, info, instrument, warn};

/// Key/value store kept as one JSON object in a file.
///
/// A missing file reads as an empty store. Writes go to a sibling temp file
/// that is then renamed over the original. A file that cannot be decoded is
/// an error on load; the next write moves it aside to `*.corrupt` and starts
/// from an empty store.
#[derive(Debug, Clone, Getters)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by `path`. The file is created on first write.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        info!("Using file store");
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[instrument(skip(self))]
    fn read_entries(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Store file missing, treating as empty");
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        let entries = serde_json::from_str(&content).map_err(|e| {
            StoreError::new(format!(
                "Store file '{}' is not a JSON object of strings: {}",
                self.path.display(),
                e
            ))
        })?;
        Ok(entries)
    }

    /// Reads the entries a write should start from.
    ///
    /// An undecodable file is renamed to `*.corrupt` and treated as empty.
    #[instrument(skip(self))]
    fn entries_for_write(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match self.read_entries() {
            Ok(entries) => Ok(entries),
            Err(e) if self.path.is_file() => {
                let aside = self.path.with_extension("corrupt");
                warn!(
                    error = %e,
                    moved_to = %aside.display(),
                    "Store file unreadable, starting from an empty store"
                );
                std::fs::rename(&self.path, &aside)?;
                Ok(BTreeMap::new())
            }
            Err(e) => Err(e),
        }
    }

    #[instrument(skip(self, entries), fields(keys = entries.len()))]
    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, serde_json::to_string_pretty(entries)?)?;
        std::fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "Store file written");
        Ok(())
    }
}

impl Store for FileStore {
    #[instrument(skip(self))]
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_entries()?.remove(key))
    }

    #[instrument(skip(self, value))]
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    #[instrument(skip(self))]
    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries_for_write()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}
