use serde::{Deserialize, Serialize};

/// the dollar and mile limits the sub-policies compare a selection against.
/// these are static heuristics, not live prices.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PolicyThresholds {
    /// lowest budget that buys a spot in a surface lot
    pub affordable_lot_dollars: f64,
    /// lowest budget that buys a spot in a ramp next to the venue
    pub premium_ramp_dollars: f64,
    /// shortest walk from an affordable lot; below this only a garage is close enough
    pub lot_walk_miles: f64,
    /// a single fare on the bus
    pub transit_fare_dollars: f64,
    /// a typical rideshare ride to the venue
    pub rideshare_dollars: f64,
    /// unlocking and riding a scooter to the venue
    pub micromobility_dollars: f64,
}

impl Default for PolicyThresholds {
    fn default() -> Self {
        Self {
            affordable_lot_dollars: 8.0,
            premium_ramp_dollars: 20.0,
            lot_walk_miles: 0.5,
            transit_fare_dollars: 2.0,
            rideshare_dollars: 10.0,
            micromobility_dollars: 4.0,
        }
    }
}
