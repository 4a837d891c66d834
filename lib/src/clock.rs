// lib/src/clock.rs

//! Time sources for the store. Stamps and countdowns read the clock instead
//! of the system time directly so a session can be replayed at a fixed instant.

use std::fmt::Debug;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::errors::{Result, StoreError};

pub trait Clock: Debug + Send + Sync {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;

    /// The current wall-clock time in the patient's time zone.
    fn local_now(&self) -> NaiveDateTime;

    /// Calendar date used to stamp lab updates (UTC).
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    fn local_time(&self) -> NaiveTime {
        self.local_now().time()
    }

    fn local_today(&self) -> NaiveDate {
        self.local_now().date()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn local_now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at one instant, carrying its own UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    at: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(at: DateTime<FixedOffset>) -> Self {
        FixedClock { at }
    }

    /// Fixed at `y-m-d h:mi` UTC, if that is a valid date and time.
    pub fn utc(y: i32, m: u32, d: u32, h: u32, mi: u32) -> Option<Self> {
        Utc.with_ymd_and_hms(y, m, d, h, mi, 0)
            .single()
            .map(|at| FixedClock { at: at.fixed_offset() })
    }

    pub fn from_rfc3339(value: &str) -> Result<Self> {
        DateTime::parse_from_rfc3339(value)
            .map(FixedClock::new)
            .map_err(|e| StoreError::ConfigurationError(format!("Invalid timestamp '{}': {}", value, e)))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.at.with_timezone(&Utc)
    }

    fn local_now(&self) -> NaiveDateTime {
        self.at.naive_local()
    }
}
