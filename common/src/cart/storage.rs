//! Cart persistence backends

use crate::error::Result;

/// A single named blob holding the serialized cart
pub trait CartStorage {
    /// `Ok(None)` when nothing has been stored yet
    fn read(&self) -> Result<Option<String>>;
    fn write(&mut self, blob: &str) -> Result<()>;
}

/// In-process storage (tests, and the fallback when no durable store exists)
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    blob: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
        }
    }

    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl CartStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.blob.clone())
    }

    fn write(&mut self, blob: &str) -> Result<()> {
        self.blob = Some(blob.to_string());
        Ok(())
    }
}

#[cfg(not(feature = "wasm"))]
pub use file::JsonFileStorage;

#[cfg(not(feature = "wasm"))]
mod file {
    use super::CartStorage;
    use crate::error::Result;
    use std::fs;
    use std::path::{Path, PathBuf};

    /// Cart blob in a JSON file; the parent directory is created on first write
    #[derive(Debug, Clone)]
    pub struct JsonFileStorage {
        path: PathBuf,
    }

    impl JsonFileStorage {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl CartStorage for JsonFileStorage {
        fn read(&self) -> Result<Option<String>> {
            if !self.path.exists() {
                return Ok(None);
            }
            Ok(Some(fs::read_to_string(&self.path)?))
        }

        fn write(&mut self, blob: &str) -> Result<()> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, blob)?;
            Ok(())
        }
    }
}
