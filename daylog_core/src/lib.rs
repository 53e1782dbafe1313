#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Core logging logic (filesystem-agnostic).
//!
//! This crate provides the date-routed logging engine. All file interactions
//! go through `daylog_traits::FileStore` and the current date comes from
//! `daylog_traits::DateSource`, so everything here is deterministic under test.
//!
//! ## Architecture
//!
//! - **Naming**: pure date-to-filename rules (`target` module)
//! - **Engine**: exists/create/append sequencing (`LoggerCore`)
//! - **Archiving**: opt-in rename of a previous weekend's file
//! - **Errors**: typed `LogError`/`BuildError` behind an `eyre` report

// Module declarations
pub mod error;
pub mod mocks;
pub mod target;

use crate::error::{BuildError, LogError, Result};
use crate::target::{WEEKEND_FILE, archive_name, target_for, weekend_start};
use chrono::NaiveDate;
use daylog_traits::{DateSource, FileStore};
use eyre::WrapErr;
use std::marker::PhantomData;

// For typed store error mapping
#[cfg(feature = "store-errors")]
use daylog_fs::error::StoreError;

/// Outcome of a single `log` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogReceipt {
    /// File the message was appended to.
    pub file: String,
    /// Whether the file had to be created first.
    pub created: bool,
    /// Name the previous weekend's file was archived under, if a rename happened.
    pub archived_to: Option<String>,
}

/// Unified core for both dynamic (boxed) and generic (static dispatch) variants.
pub struct LoggerCore<D: DateSource, S: FileStore> {
    dates: D,
    store: S,
    // Opt-in cross-weekend rename; off by default.
    archive_weekends: bool,
}

impl<D: DateSource, S: FileStore> core::fmt::Debug for LoggerCore<D, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LoggerCore")
            .field("archive_weekends", &self.archive_weekends)
            .finish()
    }
}

impl<D: DateSource, S: FileStore> LoggerCore<D, S> {
    /// Append `message` to today's log file, creating the file first when absent.
    ///
    /// Weekday messages go to `log<YYYYMMDD>.txt`, Saturday/Sunday messages to
    /// `weekend.txt`. The target is recomputed from the date source on every
    /// call; the logger itself holds no per-write state.
    pub fn log(&mut self, message: &str) -> Result<LogReceipt> {
        let today = self.dates.today();
        let file = target_for(today);

        let archived_to = if self.archive_weekends && file == WEEKEND_FILE {
            self.archive_stale_weekend(today)
                .wrap_err("weekend archive check")?
        } else {
            None
        };

        let exists = self
            .store
            .exists(&file)
            .map_err(|e| eyre::Report::new(map_store_error_dyn(&*e)))
            .wrap_err("existence check")?;
        if !exists {
            self.store
                .create(&file)
                .map_err(|e| eyre::Report::new(map_store_error_dyn(&*e)))
                .wrap_err("create log file")?;
        }
        self.store
            .append(&file, message)
            .map_err(|e| eyre::Report::new(map_store_error_dyn(&*e)))
            .wrap_err("append message")?;

        tracing::debug!(file = %file, created = !exists, "message appended");
        Ok(LogReceipt {
            file,
            created: !exists,
            archived_to,
        })
    }

    /// Whether cross-weekend archiving is enabled.
    pub fn archives_weekends(&self) -> bool {
        self.archive_weekends
    }

    /// Rename a `weekend.txt` left over from an earlier weekend to its
    /// date-stamped archive name. Returns the archive name when a rename
    /// happened, `None` when the file is absent or belongs to this weekend.
    fn archive_stale_weekend(&mut self, today: NaiveDate) -> Result<Option<String>> {
        let present = self
            .store
            .exists(WEEKEND_FILE)
            .map_err(|e| eyre::Report::new(map_store_error_dyn(&*e)))
            .wrap_err("existence check")?;
        if !present {
            return Ok(None);
        }
        let written = self
            .store
            .last_write_time(WEEKEND_FILE)
            .map_err(|e| eyre::Report::new(map_store_error_dyn(&*e)))
            .wrap_err("last write time")?;
        let written_day = written.date();
        if weekend_start(written_day) >= weekend_start(today) {
            // Same weekend (Saturday then Sunday): keep appending.
            return Ok(None);
        }
        let archive = archive_name(written_day);
        self.store
            .rename(WEEKEND_FILE, &archive)
            .map_err(|e| eyre::Report::new(map_store_error_dyn(&*e)))
            .wrap_err("archive rename")?;
        tracing::info!(from = WEEKEND_FILE, to = %archive, "archived previous weekend log");
        Ok(Some(archive))
    }
}

/// Public dynamic (boxed) logger that preserves a collaborator-free API.
pub struct FileLogger {
    inner: LoggerCore<Box<dyn DateSource>, Box<dyn FileStore>>,
}

impl core::fmt::Debug for FileLogger {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FileLogger")
            .field("archive_weekends", &self.inner.archive_weekends)
            .finish()
    }
}

impl FileLogger {
    /// Start building a FileLogger.
    pub fn builder() -> LoggerBuilder<Missing, Missing> {
        LoggerBuilder::default()
    }

    /// Append `message` to today's log file, creating the file first when absent.
    pub fn log(&mut self, message: &str) -> Result<LogReceipt> {
        self.inner.log(message)
    }

    /// Whether cross-weekend archiving is enabled.
    pub fn archives_weekends(&self) -> bool {
        self.inner.archives_weekends()
    }
}

// Map any boxed collaborator error to a typed LogError, with special
// handling for known store errors.
fn map_store_error_dyn(e: &(dyn std::error::Error + 'static)) -> LogError {
    #[cfg(feature = "store-errors")]
    if let Some(se) = e.downcast_ref::<StoreError>() {
        return match se {
            StoreError::Io(io) => LogError::Io(io.to_string()),
            StoreError::InvalidName(name) => LogError::InvalidName(name.clone()),
            other => LogError::Store(other.to_string()),
        };
    }
    LogError::Store(e.to_string())
}

// Type-state markers for the builder
pub struct Missing;
pub struct Set;

/// Builder for `FileLogger`. Collaborators are mandatory; `build()` only
/// becomes available once both have been provided.
pub struct LoggerBuilder<S, D> {
    store: Option<Box<dyn FileStore>>,
    dates: Option<Box<dyn DateSource>>,
    archive_weekends: bool,
    // Type-state markers
    _s: PhantomData<S>,
    _d: PhantomData<D>,
}

impl Default for LoggerBuilder<Missing, Missing> {
    fn default() -> Self {
        Self {
            store: None,
            dates: None,
            archive_weekends: false,
            _s: PhantomData,
            _d: PhantomData,
        }
    }
}

impl<S, D> LoggerBuilder<S, D> {
    /// Fallible build available in any type-state; returns a typed BuildError
    /// for missing pieces.
    pub fn try_build(self) -> Result<FileLogger> {
        let store = self
            .store
            .ok_or_else(|| eyre::Report::new(BuildError::MissingStore))?;
        let dates = self
            .dates
            .ok_or_else(|| eyre::Report::new(BuildError::MissingDates))?;
        Ok(FileLogger {
            inner: LoggerCore {
                dates,
                store,
                archive_weekends: self.archive_weekends,
            },
        })
    }

    /// Chainable setter that does not affect type-state: rename a stale
    /// `weekend.txt` before weekend writes. Off by default.
    pub fn with_weekend_archive(mut self, enabled: bool) -> Self {
        self.archive_weekends = enabled;
        self
    }
}

// Setters that advance type-state when providing mandatory collaborators
impl<D> LoggerBuilder<Missing, D> {
    pub fn with_store(self, store: impl FileStore + 'static) -> LoggerBuilder<Set, D> {
        LoggerBuilder {
            store: Some(Box::new(store)),
            dates: self.dates,
            archive_weekends: self.archive_weekends,
            _s: PhantomData,
            _d: PhantomData,
        }
    }
}

impl<S> LoggerBuilder<S, Missing> {
    pub fn with_dates(self, dates: impl DateSource + 'static) -> LoggerBuilder<S, Set> {
        LoggerBuilder {
            store: self.store,
            dates: Some(Box::new(dates)),
            archive_weekends: self.archive_weekends,
            _s: PhantomData,
            _d: PhantomData,
        }
    }
}

impl LoggerBuilder<Set, Set> {
    /// Build the FileLogger. Only available when store and dates are set.
    pub fn build(self) -> Result<FileLogger> {
        self.try_build()
    }
}

/// Generic, statically-dispatched alias using the unified core.
pub type LoggerG<D, S> = LoggerCore<D, S>;

/// Build a generic, statically-dispatched logger from concrete collaborators.
pub fn build_logger<D, S>(dates: D, store: S, archive_weekends: bool) -> LoggerG<D, S>
where
    D: DateSource + 'static,
    S: FileStore + 'static,
{
    LoggerCore {
        dates,
        store,
        archive_weekends,
    }
}
