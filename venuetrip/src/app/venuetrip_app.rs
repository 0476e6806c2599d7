use std::path::Path;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use venuetrip_core::{
    fragment::{encode_fragment, parse_fragment, ChangedFields},
    model::{arrival_time_options, default_arrival_time, is_parking_enforced_str, TripSelection},
};

use super::{recommend, SelectionOverrides, VenueTripConfig};
use crate::model::recommendation::{
    CandidateOrdering, FallbackPolicy, RecommendationError, RuleTable,
};

/// Command line tool for planning how to get to a venue: pick a parking or
/// travel strategy from the selected travel modes, budget and walk distance
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct VenueTripApp {
    #[command(subcommand)]
    pub op: VenueTripOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum VenueTripOperation {
    /// recommend a strategy for a trip selection and print it as JSON
    Recommend {
        #[command(flatten)]
        selection: SelectionOverrides,

        /// settings file (TOML) with engine, defaults and rules_file sections
        #[arg(long)]
        configuration_file: Option<String>,

        /// overrides the configured fallback policy
        #[arg(long, value_enum)]
        fallback_policy: Option<FallbackPolicy>,

        /// overrides the configured candidate ordering
        #[arg(long, value_enum)]
        candidate_ordering: Option<CandidateOrdering>,
    },
    /// report whether on-street parking meters are enforced at a day and time
    Enforcement {
        /// arrival day, such as 'saturday' or 'today'
        #[arg(long)]
        day: String,

        /// arrival time as HH:MM
        #[arg(long)]
        time: String,
    },
    /// read a link fragment and print the selection it restores
    Fragment {
        /// link fragment, such as '#modes=drive,transit&day=friday&time=1730'
        fragment: String,

        /// current time as HH:MM, used to choose the default arrival time
        #[arg(long)]
        now: Option<String>,

        /// settings file (TOML) holding selection defaults
        #[arg(long)]
        configuration_file: Option<String>,
    },
    /// check that a rule table file parses and covers every outcome
    ValidateRules {
        /// rule table file, TOML or JSON
        #[arg(long)]
        rules_file: String,
    },
    /// list the arrival times offered to the user
    TimeOptions {
        /// current time as HH:MM, used to mark the default arrival time
        #[arg(long)]
        now: Option<String>,
    },
}

impl VenueTripOperation {
    pub fn run(&self) -> Result<(), RecommendationError> {
        match self {
            VenueTripOperation::Recommend {
                selection,
                configuration_file,
                fallback_policy,
                candidate_ordering,
            } => {
                let mut config = VenueTripConfig::from_optional_file(configuration_file.as_ref())?;
                if let Some(policy) = fallback_policy {
                    config.engine.fallback_policy = *policy;
                }
                if let Some(ordering) = candidate_ordering {
                    config.engine.candidate_ordering = *ordering;
                }
                let report = recommend::recommend(selection, &config)?;
                print_json(&report)
            }
            VenueTripOperation::Enforcement { day, time } => {
                let enforced = is_parking_enforced_str(day, time);
                print_json(&serde_json::json!({
                    "day": day,
                    "time": time,
                    "enforced": enforced,
                }))
            }
            VenueTripOperation::Fragment {
                fragment,
                now,
                configuration_file,
            } => {
                let config = VenueTripConfig::from_optional_file(configuration_file.as_ref())?;
                let overrides = SelectionOverrides {
                    now: now.clone(),
                    ..Default::default()
                };
                let mut selection = TripSelection::new(&config.defaults, overrides.current_time()?);
                let mut changed = ChangedFields::default();
                parse_fragment(fragment).apply(&mut selection, &mut changed, &config.defaults);
                print_json(&serde_json::json!({
                    "fragment": encode_fragment(&selection, &changed),
                    "changed": changed,
                    "selection": selection,
                }))
            }
            VenueTripOperation::ValidateRules { rules_file } => {
                let table = RuleTable::from_file(Path::new(rules_file))?;
                table.ensure_complete()?;
                log::info!("rule table '{rules_file}' is complete");
                print_json(&serde_json::json!({
                    "rules_file": rules_file,
                    "rules": table.len(),
                    "complete": true,
                }))
            }
            VenueTripOperation::TimeOptions { now } => {
                let overrides = SelectionOverrides {
                    now: now.clone(),
                    ..Default::default()
                };
                let default_time = default_arrival_time(overrides.current_time()?);
                let options = arrival_time_options()
                    .into_iter()
                    .map(|t| {
                        serde_json::json!({
                            "value": t,
                            "label": t.display_label(),
                            "default": t == default_time,
                        })
                    })
                    .collect::<Vec<_>>();
                print_json(&options)
            }
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), RecommendationError> {
    let output = serde_json::to_string_pretty(value)
        .map_err(|e| RecommendationError::SerializationError(e.to_string()))?;
    println!("{output}");
    Ok(())
}
