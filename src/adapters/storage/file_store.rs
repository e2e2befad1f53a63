//! File-based Key-Value Store Adapter
//!
//! Stores each key as a JSON file inside a cache directory.
//! Each write goes to its own uniquely named temporary file in the same
//! directory and is then renamed into place, so readers never see a
//! half-written entry and overlapping writers never share a temp path.

use async_trait::async_trait;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{KeyValueError, KeyValueStore};

/// File-based key-value store
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    base_path: PathBuf,
}

impl FileKeyValueStore {
    /// Create a new file store rooted at a directory
    ///
    /// The directory is created on first write.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the file path for a key
    ///
    /// Characters outside `[A-Za-z0-9._-]` are replaced with `_`.
    fn entry_path(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base_path.join(format!("{file_name}.json"))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueError> {
        match fs::read_to_string(self.entry_path(key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(e)),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), KeyValueError> {
        fs::create_dir_all(&self.base_path).await.map_err(io_error)?;

        let dir = self.base_path.clone();
        let path = self.entry_path(key);
        tokio::task::spawn_blocking(move || write_replacing(&dir, &path, value.as_bytes()))
            .await
            .map_err(|e| KeyValueError::IoError(format!("write task failed: {e}")))?
    }
}

/// Writes `contents` to a fresh temp file in `dir` and renames it over `path`.
fn write_replacing(dir: &Path, path: &Path, contents: &[u8]) -> Result<(), KeyValueError> {
    let mut tmp = tempfile::Builder::new()
        .prefix(".entry-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(io_error)?;
    tmp.write_all(contents).map_err(io_error)?;
    tmp.persist(path).map_err(|e| io_error(e.error))?;
    Ok(())
}

fn io_error(e: std::io::Error) -> KeyValueError {
    KeyValueError::IoError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (FileKeyValueStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().join("cache"));
        (store, temp_dir)
    }

    #[tokio::test]
    async fn get_before_any_write_returns_none() {
        let (store, _temp) = create_test_store();
        assert_eq!(store.get("github_data_v2_octocat").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_creates_directory_and_file() {
        let (store, temp) = create_test_store();
        store
            .set("github_data_v2_octocat", "{}".to_string())
            .await
            .unwrap();

        let path = temp.path().join("cache").join("github_data_v2_octocat.json");
        assert!(path.exists());
        assert_eq!(
            store.get("github_data_v2_octocat").await.unwrap(),
            Some("{}".to_string())
        );
    }

    fn cache_file_names(temp: &TempDir) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(temp.path().join("cache"))
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn set_overwrites_and_leaves_no_temp_file() {
        let (store, temp) = create_test_store();
        store.set("k", "first".to_string()).await.unwrap();
        store.set("k", "second".to_string()).await.unwrap();

        assert_eq!(store.get("k").await.unwrap(), Some("second".to_string()));
        assert_eq!(cache_file_names(&temp), vec!["k.json".to_string()]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn overlapping_writes_to_one_key_all_succeed() {
        let (store, temp) = create_test_store();
        let key = "github_data_v2_octocat";

        for round in 0..100 {
            let first = store.clone();
            let second = store.clone();
            let a = tokio::spawn(async move { first.set(key, format!("a-{round}")).await });
            let b = tokio::spawn(async move { second.set(key, format!("b-{round}")).await });

            assert!(a.await.unwrap().is_ok(), "round {round}: first writer failed");
            assert!(b.await.unwrap().is_ok(), "round {round}: second writer failed");

            let stored = store.get(key).await.unwrap().unwrap();
            assert!(stored == format!("a-{round}") || stored == format!("b-{round}"));
        }

        assert_eq!(cache_file_names(&temp), vec![format!("{key}.json")]);
    }

    #[test]
    fn entry_path_sanitizes_separators() {
        let store = FileKeyValueStore::new("/tmp/cache");
        assert_eq!(
            store.entry_path("../etc/passwd"),
            PathBuf::from("/tmp/cache/.._etc_passwd.json")
        );
    }
}
