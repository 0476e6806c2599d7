use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::{ClockTime, DayToken};

/// on-street parking meter enforcement hours. meters are enforced from
/// `start` (inclusive) until `end` (exclusive) on every day except the
/// `free_days`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EnforcementSchedule {
    pub start: ClockTime,
    pub end: ClockTime,
    pub free_days: Vec<Weekday>,
}

impl Default for EnforcementSchedule {
    fn default() -> Self {
        Self {
            start: ClockTime::from_hm(8, 0),
            end: ClockTime::from_hm(19, 0),
            free_days: vec![Weekday::Sat, Weekday::Sun],
        }
    }
}

impl EnforcementSchedule {
    /// whether meters are enforced on this day at this time. an unset day or
    /// time is treated as enforced. relative days ("today", "tomorrow") and
    /// unrecognized tokens are not resolved to a calendar day and fall under
    /// the weekday hours.
    pub fn is_enforced(&self, day: &DayToken, time: Option<&ClockTime>) -> bool {
        let time = match (day, time) {
            (DayToken::Unset, _) | (_, None) => return true,
            (_, Some(time)) => time,
        };
        if let Some(weekday) = day.weekday() {
            if self.free_days.contains(&weekday) {
                return false;
            }
        }
        self.start <= *time && *time < self.end
    }
}

/// meter enforcement under the default schedule (weekdays 08:00 to 19:00).
pub fn is_parking_enforced(day: &DayToken, time: Option<&ClockTime>) -> bool {
    EnforcementSchedule::default().is_enforced(day, time)
}

/// meter enforcement for raw day and time strings, as stored in a shared link.
/// a time that fails to parse is treated as enforced.
pub fn is_parking_enforced_str(day: &str, time: &str) -> bool {
    if time.trim().is_empty() {
        return true;
    }
    match ClockTime::from_str(time) {
        Ok(t) => is_parking_enforced(&DayToken::parse(day), Some(&t)),
        Err(e) => {
            log::debug!("assuming meters are enforced: {e}");
            true
        }
    }
}
