use chrono::{Datelike, Local, NaiveDate, Weekday};

/// Calendar date abstraction for target-file selection across the stack.
///
/// - today(): returns the current calendar date
/// - is_weekend(): helper over `today()` for the Saturday/Sunday branch
pub trait DateSource {
    fn today(&self) -> NaiveDate;

    /// True when `today()` falls on a Saturday or Sunday.
    fn is_weekend(&self) -> bool {
        matches!(self.today().weekday(), Weekday::Sat | Weekday::Sun)
    }
}

impl<T: DateSource + ?Sized> DateSource for Box<T> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Default date source backed by the local system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemDate;

impl SystemDate {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl DateSource for SystemDate {
    #[inline]
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[cfg(test)]
pub mod test_date {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Deterministic test date source whose day can be advanced manually.
    #[derive(Debug, Clone)]
    pub struct ShiftableDate {
        base: NaiveDate,
        offset_days: Arc<Mutex<i64>>,
    }

    impl ShiftableDate {
        pub fn new(base: NaiveDate) -> Self {
            Self {
                base,
                offset_days: Arc::new(Mutex::new(0)),
            }
        }

        /// Advance the date by the given number of days.
        pub fn advance_days(&self, days: i64) {
            if let Ok(mut off) = self.offset_days.lock() {
                *off = off.saturating_add(days);
            }
        }
    }

    impl DateSource for ShiftableDate {
        fn today(&self) -> NaiveDate {
            let off = self.offset_days.lock().map(|g| *g).unwrap_or(0);
            self.base + chrono::Duration::days(off)
        }
    }
}
