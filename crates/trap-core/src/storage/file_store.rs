use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{Error, Result};
use crate::storage::KeyValueStore;

/// Key-value store persisted as one JSON object file.
///
/// Each write rewrites the whole file through a sibling temp file and a
/// rename, so readers never see a half-written store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store; an
    /// unreadable or corrupt file is logged and treated as empty.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read(&path) {
            Ok(bytes) => Self::parse(&path, bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, entries })
    }

    /// Open the named store inside `dir` (`<dir>/<name>.json`).
    pub fn open_named<P: AsRef<Path>>(dir: P, name: &str) -> Result<Self> {
        Self::open(dir.as_ref().join(format!("{}.json", name)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(path: &Path, bytes: Vec<u8>) -> BTreeMap<String, String> {
        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(e) => {
                warn!("Ignoring corrupt store {}: {}", path.display(), e);
                return BTreeMap::new();
            }
        };
        if content.trim().is_empty() {
            return BTreeMap::new();
        }
        match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Ignoring corrupt store {}: {}", path.display(), e);
                BTreeMap::new()
            }
        }
    }

    /// Write `entries` to disk and adopt them only once the write succeeded.
    fn commit(&mut self, entries: BTreeMap<String, String>) -> Result<()> {
        self.flush(&entries)?;
        self.entries = entries;
        Ok(())
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            Error::Store(format!(
                "Failed to replace {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        let mut entries = self.entries.clone();
        entries.insert(key.to_string(), value);
        self.commit(entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        let mut entries = self.entries.clone();
        entries.remove(key);
        self.commit(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::open(temp.path().join("prefs.json")).unwrap();
        assert!(store.get("anything").is_none());
    }

    #[test]
    fn test_set_persists_across_reopen() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("prefs.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("key", "value".to_string()).unwrap();
        assert!(path.exists());

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("key").as_deref(), Some("value"));
    }

    #[test]
    fn test_remove_persists() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::open_named(temp.path(), "prefs").unwrap();
        store.set("key", "value".to_string()).unwrap();
        store.remove("key").unwrap();

        let reopened = FileStore::open_named(temp.path(), "prefs").unwrap();
        assert!(reopened.get("key").is_none());
    }

    #[test]
    fn test_corrupt_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert!(store.get("key").is_none());
    }

    #[test]
    fn test_invalid_utf8_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prefs.json");
        fs::write(&path, [0xff, 0xfe, b'{', b'}']).unwrap();

        let mut store = FileStore::open(&path).unwrap();
        assert!(store.get("key").is_none());

        store.set("key", "value".to_string()).unwrap();
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("key").as_deref(), Some("value"));
    }

    #[test]
    fn test_failed_write_keeps_previous_entries() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("store");
        let mut store = FileStore::open_named(&dir, "prefs").unwrap();
        store.set("kept", "1".to_string()).unwrap();

        // A plain file where the store directory used to be
        fs::remove_dir_all(&dir).unwrap();
        fs::write(&dir, "").unwrap();

        assert!(store.set("lost", "2".to_string()).is_err());
        assert!(store.get("lost").is_none());
        assert!(store.remove("kept").is_err());
        assert_eq!(store.get("kept").as_deref(), Some("1"));
        assert_eq!(store.path(), dir.join("prefs.json"));
    }
}
