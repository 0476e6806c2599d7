use std::str::FromStr;

use chrono::NaiveTime;
use clap::Args;
use serde::{Deserialize, Serialize};
use venuetrip_core::{
    fragment::{decode_time, encode_fragment, parse_fragment, ChangedFields},
    model::{ClockTime, DayToken, ModeSet, SelectionDefaults, TripSelection},
};

use super::VenueTripConfig;
use crate::model::{
    recommendation::{RecommendationEngine, RecommendationError, RecommendationPair},
    DirectionsLink,
};

/// trip selection values given on the command line. a link fragment is applied
/// first and the individual flags are applied over it.
#[derive(Args, Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionOverrides {
    /// link fragment to start from, such as '#modes=drive&day=friday&time=730'
    #[arg(long)]
    pub fragment: Option<String>,

    /// comma-delimited travel modes, first is the primary mode
    /// (drive, rideshare, transit, micromobility, shuttle, bike)
    #[arg(long)]
    pub modes: Option<String>,

    /// arrival day: today, tomorrow, or a weekday name
    #[arg(long)]
    pub day: Option<String>,

    /// arrival time as HH:MM, or in link form such as 730
    #[arg(long)]
    pub time: Option<String>,

    /// party size, clamped to [1, 6]
    #[arg(long, allow_hyphen_values(true))]
    pub people: Option<i64>,

    /// longest walk the party will make, in miles
    #[arg(long)]
    pub walk: Option<f64>,

    /// most the party will pay, in dollars
    #[arg(long)]
    pub pay: Option<f64>,

    /// name of the venue
    #[arg(long)]
    pub destination: Option<String>,

    /// current time as HH:MM, used to choose the default arrival time.
    /// if not provided, the local clock is read.
    #[arg(long)]
    pub now: Option<String>,
}

impl SelectionOverrides {
    pub fn current_time(&self) -> Result<NaiveTime, RecommendationError> {
        match &self.now {
            Some(now) => {
                let clock = ClockTime::from_str(now)?;
                Ok(NaiveTime::from_hms_opt(clock.hour() as u32, clock.minute() as u32, 0)
                    .unwrap_or_default())
            }
            None => Ok(chrono::Local::now().time()),
        }
    }

    /// the selection these overrides describe, along with which fields the
    /// user set.
    pub fn build_selection(
        &self,
        defaults: &SelectionDefaults,
    ) -> Result<(TripSelection, ChangedFields), RecommendationError> {
        let mut selection = TripSelection::new(defaults, self.current_time()?);
        let mut changed = ChangedFields::default();

        if let Some(fragment) = &self.fragment {
            parse_fragment(fragment).apply(&mut selection, &mut changed, defaults);
        }
        if let Some(modes) = &self.modes {
            selection.modes.clear();
            for mode in ModeSet::from_delimited(modes).iter() {
                selection.toggle_mode(*mode, defaults);
            }
        }
        if let Some(day) = &self.day {
            selection.day = DayToken::parse(day);
            changed.day = true;
        }
        if let Some(time) = &self.time {
            selection.time = Some(decode_time(time)?);
            changed.time = true;
        }
        if let Some(people) = self.people {
            selection.set_people(people);
            changed.people = true;
        }
        if let Some(walk) = self.walk {
            selection.set_walk_miles(walk);
            changed.walk = true;
        }
        if let Some(pay) = self.pay {
            selection.set_cost_dollars(pay);
            changed.cost = true;
        }
        if let Some(destination) = &self.destination {
            selection.destination = destination.clone();
        }
        Ok((selection, changed))
    }
}

/// everything the planner shows for one selection.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationReport {
    pub selection: TripSelection,
    /// names of the services behind the selected modes, primary first
    pub mode_labels: Vec<String>,
    /// link fragment that restores this selection
    pub fragment: String,
    pub parking_enforced: bool,
    pub walk_minutes: u32,
    pub display_cost: f64,
    pub directions: DirectionsLink,
    #[serde(flatten)]
    pub recommendation: RecommendationPair,
}

impl RecommendationReport {
    pub fn new(
        engine: &RecommendationEngine,
        selection: TripSelection,
        changed: &ChangedFields,
    ) -> Result<RecommendationReport, RecommendationError> {
        let recommendation = engine.build_recommendation(&selection)?;
        let config = engine.config();
        Ok(RecommendationReport {
            mode_labels: selection.modes.iter().map(|m| m.label().to_string()).collect(),
            fragment: encode_fragment(&selection, changed),
            parking_enforced: config
                .enforcement
                .is_enforced(&selection.day, selection.time.as_ref()),
            walk_minutes: selection.walk_minutes(),
            display_cost: selection.display_cost(),
            directions: DirectionsLink::for_selection(&selection, &config.destination),
            recommendation,
            selection,
        })
    }
}

/// build the selection from command line values and recommend a strategy for it.
pub fn recommend(
    overrides: &SelectionOverrides,
    config: &VenueTripConfig,
) -> Result<RecommendationReport, RecommendationError> {
    let engine = config.build_engine()?;
    let (selection, changed) = overrides.build_selection(&config.defaults)?;
    RecommendationReport::new(&engine, selection, &changed)
}

#[cfg(test)]
mod test {
    use super::*;
    use venuetrip_core::model::ModeTag;

    fn overrides() -> SelectionOverrides {
        SelectionOverrides {
            now: Some(String::from("16:00")),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_only() {
        let (selection, changed) = overrides()
            .build_selection(&SelectionDefaults::default())
            .unwrap();
        assert_eq!(selection.time.unwrap().to_string(), "18:00");
        assert!(selection.modes.is_empty());
        assert_eq!(changed, ChangedFields::default());
    }

    #[test]
    fn test_flags_override_fragment() {
        let o = SelectionOverrides {
            fragment: Some(String::from("#modes=bike,shuttle&day=friday&time=1730&people=2")),
            people: Some(4),
            time: Some(String::from("19:30")),
            ..overrides()
        };
        let (selection, changed) = o.build_selection(&SelectionDefaults::default()).unwrap();
        assert_eq!(selection.modes.to_delimited(), "bike,shuttle");
        assert_eq!(selection.day.to_string(), "friday");
        assert_eq!(selection.time.unwrap().to_string(), "19:30");
        assert_eq!(selection.people, 4);
        assert!(changed.day && changed.time && changed.people);
    }

    #[test]
    fn test_modes_flag_applies_default_costs() {
        let o = SelectionOverrides {
            modes: Some(String::from("rideshare,drive")),
            ..overrides()
        };
        let (selection, _) = o.build_selection(&SelectionDefaults::default()).unwrap();
        assert_eq!(selection.primary_mode(), Some(ModeTag::Rideshare));
        assert_eq!(selection.cost_dollars, 15.0);
    }

    #[test]
    fn test_bad_time_is_an_error() {
        let o = SelectionOverrides {
            time: Some(String::from("late")),
            ..overrides()
        };
        let result = o.build_selection(&SelectionDefaults::default());
        assert!(matches!(result, Err(RecommendationError::Selection(_))));
    }

    #[test]
    fn test_report() {
        let o = SelectionOverrides {
            modes: Some(String::from("drive")),
            day: Some(String::from("tuesday")),
            time: Some(String::from("19:30")),
            ..overrides()
        };
        let report = recommend(&o, &VenueTripConfig::default()).unwrap();
        assert!(!report.parking_enforced);
        assert_eq!(report.fragment, "modes=drive&day=tuesday&time=730");
        assert_eq!(report.walk_minutes, 10);
        assert_eq!(report.directions.link_text, "Find parking near destination");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["primary"]["title"], "Park at affordable lot and walk");
        assert_eq!(json["alternate"]["title"], "Find free street parking");
        assert_eq!(json["outcome"]["condition"], "affordableLot");
        assert_eq!(json["selection"]["walkMiles"], 0.5);
        assert_eq!(json["modeLabels"], serde_json::json!(["driving"]));
    }

    #[test]
    fn test_report_mode_labels_follow_selection_order() {
        let o = SelectionOverrides {
            modes: Some(String::from("shuttle,rideshare,transit")),
            ..overrides()
        };
        let report = recommend(&o, &VenueTripConfig::default()).unwrap();
        assert_eq!(report.mode_labels, vec!["DASH", "Uber/Lyft", "The Rapid"]);
    }
}
