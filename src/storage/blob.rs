// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Key/value blob storage port and its implementations.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use crate::error::{AppError, Result};

/// String-keyed blob storage.
///
/// The substrate is deliberately dumb: string keys to string values,
/// synchronous, no transactions. Writes are fire-and-forget; implementations
/// log failures and carry on, so callers never observe a storage error after
/// startup.
pub trait BlobStore {
    /// Read the value under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);
    /// Delete `key`. Deleting a missing key is not an error.
    fn remove(&mut self, key: &str);
}

/// One file per key under a root directory.
#[derive(Debug)]
pub struct FileBlobStore {
    root: PathBuf,
}

impl FileBlobStore {
    /// Open a blob store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            AppError::Storage(format!("Failed to create {}: {}", root.display(), e))
        })?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(e) = fs::write(self.path_for(key), value) {
            tracing::warn!(key, error = %e, "Blob write failed");
        }
    }

    fn remove(&mut self, key: &str) {
        if let Err(e) = fs::remove_file(self.path_for(key)) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(key, error = %e, "Blob delete failed");
            }
        }
    }
}

/// In-memory store with shared backing.
///
/// Clones share one map, so a clone handed to a second `App` sees what the
/// first wrote. That is how tests simulate a page reload. Single-threaded,
/// like everything above the storage line.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}
