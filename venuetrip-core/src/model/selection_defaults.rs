use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{DayToken, ModeTag};

const COST_TOLERANCE: f64 = 1e-9;

/// the values a new (or reset) trip selection starts from.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SelectionDefaults {
    pub destination: String,
    pub day: DayToken,
    pub people: u8,
    pub walk_miles: f64,
    /// willingness to pay before any mode-specific default is applied
    pub cost_dollars: f64,
    /// willingness to pay to switch to when the mode becomes the primary mode
    /// while the cost is still sitting at a default value.
    pub mode_costs: IndexMap<ModeTag, f64>,
}

impl Default for SelectionDefaults {
    fn default() -> Self {
        Self {
            destination: String::from("Van Andel Arena"),
            day: DayToken::Today,
            people: 1,
            walk_miles: 0.5,
            cost_dollars: 10.0,
            mode_costs: IndexMap::from([
                (ModeTag::Micromobility, 4.0),
                (ModeTag::Transit, 2.0),
                (ModeTag::Rideshare, 15.0),
            ]),
        }
    }
}

impl SelectionDefaults {
    /// true if the cost still matches the general default or any mode default,
    /// meaning the user has not picked a value of their own.
    pub fn is_default_cost(&self, cost: f64) -> bool {
        std::iter::once(&self.cost_dollars)
            .chain(self.mode_costs.values())
            .any(|default| (default - cost).abs() < COST_TOLERANCE)
    }

    /// the default cost for a primary mode, if it has one.
    pub fn mode_cost(&self, mode: ModeTag) -> Option<f64> {
        self.mode_costs.get(&mode).copied()
    }
}
