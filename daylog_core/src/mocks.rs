//! Test and helper doubles for daylog_core.

use chrono::{NaiveDate, NaiveDateTime};
use daylog_traits::{DateSource, FileStore};

/// A store that fails every operation; useful for wiring tests where no
/// file access is expected to happen.
pub struct NoopStore;

impl FileStore for NoopStore {
    fn exists(&self, _name: &str) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        Err(Box::new(std::io::Error::other("noop store")))
    }
    fn create(&mut self, _name: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Err(Box::new(std::io::Error::other("noop store")))
    }
    fn append(
        &mut self,
        _name: &str,
        _text: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Err(Box::new(std::io::Error::other("noop store")))
    }
    fn rename(
        &mut self,
        _old_name: &str,
        _new_name: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Err(Box::new(std::io::Error::other("noop store")))
    }
    fn last_write_time(
        &self,
        _name: &str,
    ) -> Result<NaiveDateTime, Box<dyn std::error::Error + Send + Sync>> {
        Err(Box::new(std::io::Error::other("noop store")))
    }
}

/// A date source pinned to a fixed calendar date.
#[derive(Debug, Clone, Copy)]
pub struct FixedDate(pub NaiveDate);

impl DateSource for FixedDate {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
