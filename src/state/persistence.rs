use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Namespace key the calculator state persists under.
pub const STATE_KEY: &str = "ecotrack-calculation-history";

/// Durable string storage keyed by namespace.
///
/// There is no delete operation; clearing means saving an empty state under
/// the same key.
pub trait KeyValueStore {
    /// Read the value for a key. A missing entry is `Ok(None)`.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Write the value for a key, replacing any previous one.
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed store: each key maps to `<root>/<key>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl KeyValueStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.entry_path(key), value)?;
        Ok(())
    }
}
