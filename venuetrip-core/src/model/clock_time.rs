use std::{fmt::Display, str::FromStr};

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::SelectionError;

pub const CLOCK_TIME_FORMAT: &str = "%H:%M";

const MINUTES_PER_HOUR: u16 = 60;
const MINUTES_PER_DAY: u16 = 24 * MINUTES_PER_HOUR;

/// a wall-clock time of day with minute resolution, written as 24-hour `HH:MM`.
/// stored as minutes since midnight so that comparisons against enforcement
/// windows and the arrival grid are plain integer comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    /// build a clock time from an hour in [0, 23] and a minute in [0, 59].
    pub fn new(hour: u16, minute: u16) -> Result<ClockTime, SelectionError> {
        if hour < 24 && minute < MINUTES_PER_HOUR {
            Ok(ClockTime::from_hm(hour, minute))
        } else {
            Err(SelectionError::InvalidClockTime(format!(
                "{hour:02}:{minute:02}"
            )))
        }
    }

    /// caller guarantees the hour and minute are in range.
    pub(crate) const fn from_hm(hour: u16, minute: u16) -> ClockTime {
        ClockTime(hour * MINUTES_PER_HOUR + minute)
    }

    pub fn hour(&self) -> u16 {
        self.0 / MINUTES_PER_HOUR
    }

    pub fn minute(&self) -> u16 {
        self.0 % MINUTES_PER_HOUR
    }

    pub fn minutes_since_midnight(&self) -> u16 {
        self.0
    }

    /// step forward (or backward) by some number of minutes, wrapping at midnight.
    pub fn wrapping_add_minutes(&self, minutes: i32) -> ClockTime {
        let day = MINUTES_PER_DAY as i32;
        let stepped = (self.0 as i32 + minutes).rem_euclid(day);
        ClockTime(stepped as u16)
    }

    /// 12-hour display label, e.g. "5:00 PM".
    pub fn display_label(&self) -> String {
        let hour = self.hour();
        let suffix = if hour < 12 { "AM" } else { "PM" };
        let hour12 = match hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{hour12}:{:02} {suffix}", self.minute())
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(value: NaiveTime) -> Self {
        ClockTime::from_hm(value.hour() as u16, value.minute() as u16)
    }
}

impl FromStr for ClockTime {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s.trim(), CLOCK_TIME_FORMAT)
            .map(ClockTime::from)
            .map_err(|_| SelectionError::InvalidClockTime(s.to_string()))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = SelectionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ClockTime::from_str(&value)
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}
