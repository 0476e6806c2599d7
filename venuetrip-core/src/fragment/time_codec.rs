use std::str::FromStr;

use crate::model::{ClockTime, SelectionError};

/// write a clock time the way it appears in a shared link: a 12-hour numeral
/// with no colon and no leading zero (17:00 is "500", 22:00 is "1000").
///
/// the arrival grid only holds evening times so the meridiem is dropped. a
/// morning time does not survive the trip through a link: 09:30 encodes as
/// "930", which decodes as 21:30.
pub fn encode_time(time: &ClockTime) -> String {
    let hour = time.hour();
    let hour12 = if hour > 12 { hour - 12 } else { hour };
    format!("{hour12}{:02}", time.minute())
}

/// read a link time back into 24-hour time.
///
/// - 3 digits are `HMM` in the afternoon or evening ("830" is 20:30)
/// - 4 digits are `HHMM`. "01xx" through "11xx" are evening ("0530" is 17:30),
///   "12xx" is noon, and a numeral that is already a 24-hour hour ("1730") is
///   kept as is
/// - any other value is read as `HH:MM`
pub fn decode_time(value: &str) -> Result<ClockTime, SelectionError> {
    let value = value.trim();
    let all_digits = value.chars().all(|c| c.is_ascii_digit());
    match value.len() {
        3 if all_digits => {
            let (hour, minute) = split_digits(value, 1)?;
            let hour = match hour {
                0 => 0,
                h => h + 12,
            };
            ClockTime::new(hour, minute)
        }
        4 if all_digits => {
            let (hour, minute) = split_digits(value, 2)?;
            let hour = match hour {
                1..=11 => hour + 12,
                h => h,
            };
            ClockTime::new(hour, minute)
        }
        _ => ClockTime::from_str(value),
    }
}

fn split_digits(value: &str, hour_len: usize) -> Result<(u16, u16), SelectionError> {
    let (hour, minute) = value.split_at(hour_len);
    let parse = |s: &str| {
        s.parse::<u16>()
            .map_err(|_| SelectionError::InvalidClockTime(value.to_string()))
    };
    Ok((parse(hour)?, parse(minute)?))
}
