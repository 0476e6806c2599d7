use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::{default_arrival_time, ClockTime, DayToken, ModeSet, ModeTag, SelectionDefaults};

pub const MIN_PEOPLE: u8 = 1;
pub const MAX_PEOPLE: u8 = 6;

/// walking pace used for walk time estimates (3 mph)
const WALK_MINUTES_PER_MILE: f64 = 20.0;

/// everything the user has chosen about their trip. the host owns and mutates
/// this record; the recommendation engine only ever reads a snapshot of it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripSelection {
    pub destination: String,
    pub day: DayToken,
    pub time: Option<ClockTime>,
    pub modes: ModeSet,
    pub people: u8,
    pub walk_miles: f64,
    pub cost_dollars: f64,
}

impl TripSelection {
    /// a fresh selection. `now` only seeds the default arrival time.
    pub fn new(defaults: &SelectionDefaults, now: NaiveTime) -> TripSelection {
        TripSelection {
            destination: defaults.destination.clone(),
            day: defaults.day.clone(),
            time: Some(default_arrival_time(now)),
            modes: ModeSet::new(),
            people: defaults.people.clamp(MIN_PEOPLE, MAX_PEOPLE),
            walk_miles: non_negative(defaults.walk_miles),
            cost_dollars: non_negative(defaults.cost_dollars),
        }
    }

    /// restore every field to its default, dropping all selected modes.
    pub fn reset(&mut self, defaults: &SelectionDefaults, now: NaiveTime) {
        *self = TripSelection::new(defaults, now);
    }

    pub fn primary_mode(&self) -> Option<ModeTag> {
        self.modes.primary()
    }

    /// select or deselect a mode. when the cost has not been moved off a
    /// default value, it follows the default of the (new) primary mode.
    pub fn toggle_mode(&mut self, mode: ModeTag, defaults: &SelectionDefaults) -> bool {
        let selected = self.modes.toggle(mode);
        let primary_cost = self.primary_mode().and_then(|m| defaults.mode_cost(m));
        if let Some(cost) = primary_cost {
            if defaults.is_default_cost(self.cost_dollars) {
                self.cost_dollars = cost;
            }
        }
        selected
    }

    /// set the party size, clamped to [1, 6].
    pub fn set_people(&mut self, people: i64) {
        self.people = people.clamp(MIN_PEOPLE as i64, MAX_PEOPLE as i64) as u8;
    }

    pub fn adjust_people(&mut self, delta: i64) {
        self.set_people(self.people as i64 + delta);
    }

    /// negative or non-finite distances are stored as zero.
    pub fn set_walk_miles(&mut self, miles: f64) {
        self.walk_miles = non_negative(miles);
    }

    /// negative or non-finite amounts are stored as zero.
    pub fn set_cost_dollars(&mut self, dollars: f64) {
        self.cost_dollars = non_negative(dollars);
    }

    /// estimated minutes to walk the full walk distance.
    pub fn walk_minutes(&self) -> u32 {
        (self.walk_miles * WALK_MINUTES_PER_MILE).round() as u32
    }

    /// rideshare drops off at the door, so walk distance is not asked for.
    pub fn walk_input_enabled(&self) -> bool {
        !self.modes.contains(ModeTag::Rideshare)
    }

    /// biking is free, so willingness to pay is not asked for.
    pub fn cost_input_enabled(&self) -> bool {
        !self.modes.contains(ModeTag::Bike)
    }

    /// fares for transit and micromobility are per person, so the amount shown
    /// to the user is the party total. other modes show the raw amount.
    pub fn display_cost(&self) -> f64 {
        if self.modes.contains(ModeTag::Transit) || self.modes.contains(ModeTag::Micromobility) {
            self.cost_dollars * self.people as f64
        } else {
            self.cost_dollars
        }
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_selection() -> (TripSelection, SelectionDefaults) {
        let defaults = SelectionDefaults::default();
        let now = NaiveTime::from_hms_opt(16, 0, 0).unwrap();
        (TripSelection::new(&defaults, now), defaults)
    }

    #[test]
    fn test_new_from_defaults() {
        let (selection, _) = new_selection();
        assert_eq!(selection.destination, "Van Andel Arena");
        assert_eq!(selection.day, DayToken::Today);
        assert_eq!(selection.time.unwrap().to_string(), "18:00");
        assert!(selection.modes.is_empty());
        assert_eq!(selection.people, 1);
        assert_eq!(selection.walk_miles, 0.5);
        assert_eq!(selection.cost_dollars, 10.0);
    }

    #[test]
    fn test_toggle_applies_primary_mode_cost() {
        let (mut selection, defaults) = new_selection();
        selection.toggle_mode(ModeTag::Micromobility, &defaults);
        assert_eq!(selection.cost_dollars, 4.0);

        let (mut selection, defaults) = new_selection();
        selection.toggle_mode(ModeTag::Rideshare, &defaults);
        assert_eq!(selection.cost_dollars, 15.0);
        // removing rideshare makes transit primary, and 15 is still a default
        selection.toggle_mode(ModeTag::Transit, &defaults);
        selection.toggle_mode(ModeTag::Rideshare, &defaults);
        assert_eq!(selection.primary_mode(), Some(ModeTag::Transit));
        assert_eq!(selection.cost_dollars, 2.0);
    }

    #[test]
    fn test_toggle_keeps_user_chosen_cost() {
        let (mut selection, defaults) = new_selection();
        selection.set_cost_dollars(12.5);
        selection.toggle_mode(ModeTag::Rideshare, &defaults);
        assert_eq!(selection.cost_dollars, 12.5);
    }

    #[test]
    fn test_toggle_drive_leaves_cost() {
        let (mut selection, defaults) = new_selection();
        assert!(selection.toggle_mode(ModeTag::Drive, &defaults));
        assert_eq!(selection.cost_dollars, 10.0);
        assert!(!selection.toggle_mode(ModeTag::Drive, &defaults));
        assert!(selection.modes.is_empty());
    }

    #[test]
    fn test_people_clamped() {
        let (mut selection, _) = new_selection();
        selection.set_people(10);
        assert_eq!(selection.people, MAX_PEOPLE);
        selection.adjust_people(-20);
        assert_eq!(selection.people, MIN_PEOPLE);
        selection.adjust_people(2);
        assert_eq!(selection.people, 3);
    }

    #[test]
    fn test_invalid_amounts_stored_as_zero() {
        let (mut selection, _) = new_selection();
        selection.set_walk_miles(-1.0);
        assert_eq!(selection.walk_miles, 0.0);
        selection.set_cost_dollars(f64::NAN);
        assert_eq!(selection.cost_dollars, 0.0);
        selection.set_cost_dollars(1e9);
        assert_eq!(selection.cost_dollars, 1e9);
    }

    #[test]
    fn test_walk_minutes() {
        let (mut selection, _) = new_selection();
        assert_eq!(selection.walk_minutes(), 10);
        selection.set_walk_miles(1.25);
        assert_eq!(selection.walk_minutes(), 25);
    }

    #[test]
    fn test_display_cost_and_inputs() {
        let (mut selection, defaults) = new_selection();
        selection.set_people(3);
        selection.toggle_mode(ModeTag::Drive, &defaults);
        assert_eq!(selection.display_cost(), 10.0);
        selection.toggle_mode(ModeTag::Transit, &defaults);
        assert_eq!(selection.display_cost(), 30.0);
        assert!(selection.walk_input_enabled());
        selection.toggle_mode(ModeTag::Rideshare, &defaults);
        assert!(!selection.walk_input_enabled());
        assert!(selection.cost_input_enabled());
        selection.toggle_mode(ModeTag::Bike, &defaults);
        assert!(!selection.cost_input_enabled());
    }

    #[test]
    fn test_reset() {
        let (mut selection, defaults) = new_selection();
        selection.toggle_mode(ModeTag::Bike, &defaults);
        selection.set_people(4);
        selection.day = DayToken::Tomorrow;
        let later = NaiveTime::from_hms_opt(18, 20, 0).unwrap();
        selection.reset(&defaults, later);
        assert!(selection.modes.is_empty());
        assert_eq!(selection.people, 1);
        assert_eq!(selection.day, DayToken::Today);
        assert_eq!(selection.time.unwrap().to_string(), "20:30");
    }
}
