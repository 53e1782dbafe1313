pub mod date;

pub use date::{DateSource, SystemDate};

use chrono::NaiveDateTime;

/// Named-file storage primitives the logger writes through.
///
/// Implementations decide where names resolve to; the core only ever passes
/// flat file names like `log20200213.txt`.
pub trait FileStore {
    fn exists(&self, name: &str) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
    fn create(&mut self, name: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn append(
        &mut self,
        name: &str,
        text: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn rename(
        &mut self,
        old_name: &str,
        new_name: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn last_write_time(
        &self,
        name: &str,
    ) -> Result<NaiveDateTime, Box<dyn std::error::Error + Send + Sync>>;
}

impl<T: FileStore + ?Sized> FileStore for Box<T> {
    fn exists(&self, name: &str) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        (**self).exists(name)
    }
    fn create(&mut self, name: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        (**self).create(name)
    }
    fn append(
        &mut self,
        name: &str,
        text: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        (**self).append(name, text)
    }
    fn rename(
        &mut self,
        old_name: &str,
        new_name: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        (**self).rename(old_name, new_name)
    }
    fn last_write_time(
        &self,
        name: &str,
    ) -> Result<NaiveDateTime, Box<dyn std::error::Error + Send + Sync>> {
        (**self).last_write_time(name)
    }
}
