mod clock_time;
mod day_token;
mod enforcement;
mod error;
mod mode;
mod mode_set;
mod selection_defaults;
mod time_grid;
mod trip_selection;

pub use clock_time::{ClockTime, CLOCK_TIME_FORMAT};
pub use day_token::DayToken;
pub use enforcement::{is_parking_enforced, is_parking_enforced_str, EnforcementSchedule};
pub use error::SelectionError;
pub use mode::ModeTag;
pub use mode_set::ModeSet;
pub use selection_defaults::SelectionDefaults;
pub use time_grid::{arrival_time_options, default_arrival_time, EARLIEST_ARRIVAL, LATEST_ARRIVAL};
pub use trip_selection::{TripSelection, MAX_PEOPLE, MIN_PEOPLE};
