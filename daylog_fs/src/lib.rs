#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Filesystem-backed `FileStore` implementation.
//!
//! `DiskStore` resolves the flat names the logger passes (`log20200213.txt`,
//! `weekend.txt`) under a root directory and maps `std::fs` failures into
//! `StoreError` before they cross the trait boundary as boxed errors.

pub mod error;

use crate::error::StoreError;
use chrono::{DateTime, Local, NaiveDateTime};
use daylog_traits::FileStore;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

type BoxedErr = Box<dyn std::error::Error + Send + Sync>;

/// File store rooted at a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct DiskStore {
    root: PathBuf,
}

impl DiskStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    /// Resolve a flat name under the root. Names carrying path separators
    /// would escape the root and are rejected.
    fn resolve(&self, name: &str) -> Result<PathBuf, StoreError> {
        if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
            return Err(StoreError::InvalidName(name.to_string()));
        }
        Ok(self.root.join(name))
    }
}

impl FileStore for DiskStore {
    fn exists(&self, name: &str) -> Result<bool, BoxedErr> {
        let path = self.resolve(name)?;
        Ok(path.try_exists().map_err(StoreError::Io)?)
    }

    fn create(&mut self, name: &str) -> Result<(), BoxedErr> {
        let path = self.resolve(name)?;
        File::create(&path).map_err(StoreError::Io)?;
        tracing::debug!(file = name, "created log file");
        Ok(())
    }

    fn append(&mut self, name: &str, text: &str) -> Result<(), BoxedErr> {
        let path = self.resolve(name)?;
        let mut file = OpenOptions::new()
            .append(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => StoreError::Missing(name.to_string()),
                _ => StoreError::Io(e),
            })?;
        writeln!(file, "{text}").map_err(StoreError::Io)?;
        Ok(())
    }

    fn rename(&mut self, old_name: &str, new_name: &str) -> Result<(), BoxedErr> {
        let old = self.resolve(old_name)?;
        let new = self.resolve(new_name)?;
        fs::rename(&old, &new).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => StoreError::Missing(old_name.to_string()),
            _ => StoreError::Io(e),
        })?;
        tracing::debug!(from = old_name, to = new_name, "renamed log file");
        Ok(())
    }

    fn last_write_time(&self, name: &str) -> Result<NaiveDateTime, BoxedErr> {
        let path = self.resolve(name)?;
        let modified = fs::metadata(&path)
            .and_then(|m| m.modified())
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => StoreError::Missing(name.to_string()),
                _ => StoreError::Io(e),
            })?;
        Ok(DateTime::<Local>::from(modified).naive_local())
    }
}
