use chrono::{Local, NaiveDate};

/// Clock abstracts access to the current date so views remain deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current calendar date.
    fn today(&self) -> NaiveDate;
}

/// Real clock backed by the local calendar date.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
