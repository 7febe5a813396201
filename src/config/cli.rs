use crate::core::Storage;
use crate::utils::error::{FixError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem storage rooted at a base directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    fn read_to_string(&self, path: &str) -> Result<String> {
        let full_path = self.full_path(path);
        tracing::debug!("reading {}", full_path.display());
        fs::read_to_string(&full_path).map_err(|e| FixError::io(path, e))
    }

    fn write_string(&self, path: &str, contents: &str) -> Result<()> {
        let full_path = self.full_path(path);
        tracing::debug!("writing {}", full_path.display());
        fs::write(&full_path, contents).map_err(|e| FixError::io(path, e))
    }
}
