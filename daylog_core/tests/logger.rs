use std::cell::RefCell;
use std::error::Error;
use std::rc::Rc;

use chrono::{NaiveDate, NaiveDateTime};
use daylog_core::FileLogger;
use daylog_core::mocks::FixedDate;
use daylog_traits::{DateSource, FileStore};

const MESSAGE: &str = "deploy finished without warnings";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Everything the logger asked the store to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Exists(String),
    Create(String),
    Append(String, String),
}

/// Store spy that records calls and answers `exists` from a fixed set.
#[derive(Default, Clone)]
struct SpyStore {
    calls: Rc<RefCell<Vec<Call>>>,
    existing: Rc<RefCell<Vec<String>>>,
}

impl SpyStore {
    fn with_existing(names: &[&str]) -> Self {
        let store = Self::default();
        store
            .existing
            .borrow_mut()
            .extend(names.iter().map(|s| s.to_string()));
        store
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl FileStore for SpyStore {
    fn exists(&self, name: &str) -> Result<bool, Box<dyn Error + Send + Sync>> {
        self.calls.borrow_mut().push(Call::Exists(name.to_string()));
        Ok(self.existing.borrow().iter().any(|n| n == name))
    }
    fn create(&mut self, name: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.calls.borrow_mut().push(Call::Create(name.to_string()));
        self.existing.borrow_mut().push(name.to_string());
        Ok(())
    }
    fn append(&mut self, name: &str, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.calls
            .borrow_mut()
            .push(Call::Append(name.to_string(), text.to_string()));
        Ok(())
    }
    fn rename(&mut self, _old: &str, _new: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        panic!("rename is not expected in these scenarios");
    }
    fn last_write_time(&self, _name: &str) -> Result<NaiveDateTime, Box<dyn Error + Send + Sync>> {
        panic!("last_write_time is not expected in these scenarios");
    }
}

fn logger_for(store: &SpyStore, today: NaiveDate) -> FileLogger {
    FileLogger::builder()
        .with_store(store.clone())
        .with_dates(FixedDate(today))
        .build()
        .expect("build logger")
}

#[test]
fn weekday_creates_file_then_appends_when_absent() {
    let store = SpyStore::default();
    let mut logger = logger_for(&store, date(2020, 2, 13)); // Thursday

    let receipt = logger.log(MESSAGE).expect("log ok");

    assert_eq!(
        store.calls(),
        vec![
            Call::Exists("log20200213.txt".into()),
            Call::Create("log20200213.txt".into()),
            Call::Append("log20200213.txt".into(), MESSAGE.into()),
        ]
    );
    assert_eq!(receipt.file, "log20200213.txt");
    assert!(receipt.created);
    assert_eq!(receipt.archived_to, None);
}

#[test]
fn weekday_appends_without_create_when_present() {
    let store = SpyStore::with_existing(&["log20200213.txt"]);
    let mut logger = logger_for(&store, date(2020, 2, 13));

    let receipt = logger.log(MESSAGE).expect("log ok");

    assert_eq!(
        store.calls(),
        vec![
            Call::Exists("log20200213.txt".into()),
            Call::Append("log20200213.txt".into(), MESSAGE.into()),
        ]
    );
    assert!(!receipt.created);
}

#[test]
fn saturday_routes_to_weekend_file() {
    let store = SpyStore::default();
    let mut logger = logger_for(&store, date(2020, 2, 8)); // Saturday

    logger.log(MESSAGE).expect("log ok");

    assert_eq!(
        store.calls(),
        vec![
            Call::Exists("weekend.txt".into()),
            Call::Create("weekend.txt".into()),
            Call::Append("weekend.txt".into(), MESSAGE.into()),
        ]
    );
}

#[test]
fn saturday_appends_to_existing_weekend_file() {
    let store = SpyStore::with_existing(&["weekend.txt"]);
    let mut logger = logger_for(&store, date(2020, 2, 8));

    logger.log(MESSAGE).expect("log ok");

    assert_eq!(
        store.calls(),
        vec![
            Call::Exists("weekend.txt".into()),
            Call::Append("weekend.txt".into(), MESSAGE.into()),
        ]
    );
}

#[test]
fn sunday_appends_to_existing_weekend_file() {
    let store = SpyStore::with_existing(&["weekend.txt"]);
    let mut logger = logger_for(&store, date(2020, 2, 9)); // Sunday

    logger.log(MESSAGE).expect("log ok");

    assert_eq!(
        store.calls(),
        vec![
            Call::Exists("weekend.txt".into()),
            Call::Append("weekend.txt".into(), MESSAGE.into()),
        ]
    );
}

#[test]
fn date_source_is_queried_on_every_call() {
    /// Date source that counts how often it is read.
    #[derive(Clone)]
    struct CountingDates {
        day: NaiveDate,
        hits: Rc<RefCell<usize>>,
    }
    impl DateSource for CountingDates {
        fn today(&self) -> NaiveDate {
            *self.hits.borrow_mut() += 1;
            self.day
        }
    }

    let hits = Rc::new(RefCell::new(0));
    let dates = CountingDates {
        day: date(2020, 2, 13),
        hits: hits.clone(),
    };
    let store = SpyStore::with_existing(&["log20200213.txt"]);
    let mut logger = FileLogger::builder()
        .with_store(store)
        .with_dates(dates)
        .build()
        .expect("build logger");

    logger.log(MESSAGE).expect("log ok");
    assert!(*hits.borrow() >= 1);

    logger.log(MESSAGE).expect("log ok");
    assert!(*hits.borrow() >= 2);
}

#[test]
fn each_call_recomputes_the_target() {
    // Same logger, the date source moves from Friday to Saturday.
    #[derive(Clone)]
    struct SeqDates {
        days: Rc<RefCell<Vec<NaiveDate>>>,
    }
    impl DateSource for SeqDates {
        fn today(&self) -> NaiveDate {
            let mut days = self.days.borrow_mut();
            if days.len() > 1 { days.remove(0) } else { days[0] }
        }
    }

    let store = SpyStore::with_existing(&["log20200207.txt", "weekend.txt"]);
    let dates = SeqDates {
        days: Rc::new(RefCell::new(vec![date(2020, 2, 7), date(2020, 2, 8)])),
    };
    let mut logger = FileLogger::builder()
        .with_store(store.clone())
        .with_dates(dates)
        .build()
        .expect("build logger");

    let friday = logger.log(MESSAGE).expect("log ok");
    let saturday = logger.log(MESSAGE).expect("log ok");

    assert_eq!(friday.file, "log20200207.txt");
    assert_eq!(saturday.file, "weekend.txt");
}
