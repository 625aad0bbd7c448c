//! Elapsed-time arithmetic over captured timestamps.

use crate::core::clock::Timestamp;
use std::fmt;

/// A non-negative elapsed interval decomposed into hours, minutes and
/// seconds. Minutes and seconds always land in `[0, 59]`; hours are
/// unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed {
    pub hours: u32,
    pub minutes: u8,
    pub seconds: u8,
}

impl Elapsed {
    pub const ZERO: Elapsed = Elapsed {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Computes the interval between two timestamps by field-wise
    /// subtraction of the hour, minute and second components, borrowing
    /// across fields so that no component goes negative.
    ///
    /// Correct only when both timestamps fall within one calendar day. If
    /// `time_out` reads earlier in the day than `time_in` the subtraction
    /// borrows through the hour field as a midnight rollover (a session
    /// spanning more than one midnight is indistinguishable and out of
    /// contract).
    pub fn between(time_in: &Timestamp, time_out: &Timestamp) -> Elapsed {
        let mut seconds = i64::from(time_out.second) - i64::from(time_in.second);
        let mut minutes = i64::from(time_out.minute) - i64::from(time_in.minute);
        let mut hours = i64::from(time_out.hour) - i64::from(time_in.hour);

        if seconds < 0 {
            seconds += 60;
            minutes -= 1;
        }
        if minutes < 0 {
            minutes += 60;
            hours -= 1;
        }
        if hours < 0 {
            // Rolled past midnight; borrow a full day.
            hours += 24;
        }

        Elapsed {
            hours: hours as u32,
            minutes: minutes as u8,
            seconds: seconds as u8,
        }
    }

    /// Normalizes a raw second count into hour/minute/second fields.
    pub fn from_seconds(total: u64) -> Elapsed {
        Elapsed {
            hours: (total / 3600) as u32,
            minutes: ((total % 3600) / 60) as u8,
            seconds: (total % 60) as u8,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        u64::from(self.hours) * 3600 + u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }
}

impl fmt::Display for Elapsed {
    /// `<hours>:<minutes>:<seconds>` with two-digit seconds, the duration
    /// layout used in log records.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}:{:02}", self.hours, self.minutes, self.seconds)
    }
}
