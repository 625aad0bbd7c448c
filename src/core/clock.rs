//! Time source abstraction and the timestamp captured from it.
//!
//! The appliance records wall-clock local time. The engine never reads the
//! system clock directly; enter/exit routines ask a [`Clock`] so tests can
//! substitute fixed or failing time sources (the real device reads an RTC
//! that may be unreachable).

use crate::core::error::EngineError;
use chrono::{DateTime, Local, NaiveDate, Timelike};
use std::fmt;

/// A wall-clock instant in the local time zone, immutable once captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    pub date: NaiveDate,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Local UTC offset rendering, may be blank when the zone is unknown.
    pub zone: String,
}

impl Timestamp {
    pub fn from_datetime(now: DateTime<Local>) -> Self {
        Timestamp {
            date: now.date_naive(),
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
            zone: now.format("%:z").to_string(),
        }
    }

    /// Builds a timestamp from raw fields; used by tests and log parsing.
    pub fn from_parts(date: NaiveDate, hour: u32, minute: u32, second: u32, zone: &str) -> Self {
        Timestamp {
            date,
            hour,
            minute,
            second,
            zone: zone.to_string(),
        }
    }
}

impl fmt::Display for Timestamp {
    /// `<date>_<h>:<m>:<s>`, the stamp layout used in log records.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}_{}:{}:{}", self.date, self.hour, self.minute, self.second)
    }
}

/// Supplies the current local timestamp on demand.
pub trait Clock {
    fn now(&self) -> Result<Timestamp, EngineError>;
}

/// The host system clock.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<Timestamp, EngineError> {
        Ok(Timestamp::from_datetime(Local::now()))
    }
}
