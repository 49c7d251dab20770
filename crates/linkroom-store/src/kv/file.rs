//! File-backed key/value store: one file per key under a root directory.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use linkroom_core::error::{AppError, ErrorKind};
use linkroom_core::result::AppResult;
use linkroom_core::traits::KeyValueStore;

/// Key/value store persisting each key as `<root>/<encoded key>.json`.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    /// Directory holding the value files.
    root: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store rooted at `root_path`, creating the directory if needed.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create data directory: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Resolve a key to the file holding its value.
    fn resolve(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", encode_key(key)))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    fn backend_type(&self) -> &str {
        "file"
    }

    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.resolve(key);
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read key: {key}"),
                e,
            )),
        }
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.resolve(key);
        let tmp = path.with_extension("json.tmp");

        fs::write(&tmp, value).await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, format!("Failed to write key: {key}"), e)
        })?;
        fs::rename(&tmp, &path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to replace key: {key}"),
                e,
            )
        })?;

        debug!(key, bytes = value.len(), "Wrote key");
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        match fs::remove_file(self.resolve(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to remove key: {key}"),
                e,
            )),
        }
    }
}

/// Encode a key into a file-name-safe string.
///
/// `[a-z0-9-]` pass through, `:` becomes `_`, everything else is written as
/// `~XX` per byte so distinct keys never share a file.
fn encode_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for byte in key.bytes() {
        match byte {
            b'a'..=b'z' | b'0'..=b'9' | b'-' => out.push(byte as char),
            b':' => out.push('_'),
            other => out.push_str(&format!("~{other:02x}")),
        }
    }
    out
}
