use chrono::{DateTime, Duration, Utc};
use std::cell::RefCell;

/// Source of arrival timestamps, injected into the shelter so admissions can
/// be stamped deterministically in tests.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to. `advance` steps it forward; a
/// stepping clock additionally moves itself by a fixed amount after every
/// reading, so successive admissions get distinct arrival times.
#[derive(Debug)]
pub struct ManualClock {
    current: RefCell<DateTime<Utc>>,
    step: Duration,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current: RefCell::new(start),
            step: Duration::zero(),
        }
    }

    /// Start at the Unix epoch.
    pub fn at_epoch() -> Self {
        Self::new(DateTime::<Utc>::UNIX_EPOCH)
    }

    /// A clock that advances itself by `step` after every reading.
    pub fn stepping(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            current: RefCell::new(start),
            step,
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut current = self.current.borrow_mut();
        *current = *current + by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let mut current = self.current.borrow_mut();
        let now = *current;
        *current = now + self.step;
        now
    }
}
