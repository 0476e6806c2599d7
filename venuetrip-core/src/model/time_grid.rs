use chrono::NaiveTime;

use super::ClockTime;

/// earliest arrival time offered to the user (5:00 PM)
pub const EARLIEST_ARRIVAL: ClockTime = ClockTime::from_hm(17, 0);
/// latest arrival time offered to the user (10:00 PM)
pub const LATEST_ARRIVAL: ClockTime = ClockTime::from_hm(22, 0);

const GRID_STEP_MINUTES: i32 = 30;
const DEFAULT_LEAD_MINUTES: i32 = 120;

/// arrival options in half-hour steps from 5:00 PM through 10:00 PM.
pub fn arrival_time_options() -> Vec<ClockTime> {
    let steps = (LATEST_ARRIVAL.minutes_since_midnight() - EARLIEST_ARRIVAL.minutes_since_midnight())
        as i32
        / GRID_STEP_MINUTES;
    (0..=steps)
        .map(|step| EARLIEST_ARRIVAL.wrapping_add_minutes(step * GRID_STEP_MINUTES))
        .collect()
}

/// the arrival time pre-selected for a new session: two hours from `now`,
/// rounded to the nearest half hour and held within the arrival grid.
pub fn default_arrival_time(now: NaiveTime) -> ClockTime {
    let later = ClockTime::from(now).wrapping_add_minutes(DEFAULT_LEAD_MINUTES);
    let (hour, minute) = match later.minute() {
        m if m < 15 => (later.hour(), 0),
        m if m < 45 => (later.hour(), 30),
        _ => ((later.hour() + 1) % 24, 0),
    };
    ClockTime::from_hm(hour, minute).clamp(EARLIEST_ARRIVAL, LATEST_ARRIVAL)
}
