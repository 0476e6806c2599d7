use serde::{Deserialize, Serialize};
use venuetrip_core::model::TripSelection;

use super::{ConditionKey, ModeCombo, PolicyThresholds};

/// the parts of a selection the sub-policies look at.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PolicyInputs {
    pub walk_miles: f64,
    pub cost_dollars: f64,
    /// whether on-street meters are enforced at the arrival day and time
    pub enforced: bool,
}

impl PolicyInputs {
    pub fn new(selection: &TripSelection, enforced: bool) -> PolicyInputs {
        PolicyInputs {
            walk_miles: selection.walk_miles,
            cost_dollars: selection.cost_dollars,
            enforced,
        }
    }
}

/// pick the condition for one mode combination.
pub fn evaluate(
    combo: ModeCombo,
    inputs: &PolicyInputs,
    thresholds: &PolicyThresholds,
) -> ConditionKey {
    match combo {
        ModeCombo::Drive => drive_condition(inputs, thresholds),
        ModeCombo::DriveShuttle
        | ModeCombo::DriveTransit
        | ModeCombo::DriveMicromobility
        | ModeCombo::Shuttle => walk_condition(inputs),
        ModeCombo::TransitShuttle | ModeCombo::Transit => {
            if !can_afford(inputs.cost_dollars, thresholds.transit_fare_dollars) {
                ConditionKey::NoCost
            } else {
                walk_condition(inputs)
            }
        }
        ModeCombo::Rideshare => fare_condition(inputs, thresholds.rideshare_dollars),
        ModeCombo::Micromobility => fare_condition(inputs, thresholds.micromobility_dollars),
        ModeCombo::Bike => ConditionKey::Default,
    }
}

/// parking strategy for driving alone. when meters are off and the user will
/// walk, a budget below a lot price costs nothing at all on the street.
pub fn drive_condition(inputs: &PolicyInputs, thresholds: &PolicyThresholds) -> ConditionKey {
    if declines_walking(inputs.walk_miles) {
        return ConditionKey::NoWalk;
    }
    let street_is_free = !inputs.enforced;
    let effective_cost = if street_is_free
        && !can_afford(inputs.cost_dollars, thresholds.affordable_lot_dollars)
    {
        0.0
    } else {
        inputs.cost_dollars
    };

    if inputs.enforced && declines_paying(inputs.cost_dollars) {
        ConditionKey::NoCost
    } else if can_afford(effective_cost, thresholds.premium_ramp_dollars) {
        ConditionKey::PremiumRamp
    } else if can_afford(effective_cost, thresholds.affordable_lot_dollars) {
        if inputs.walk_miles >= thresholds.lot_walk_miles {
            ConditionKey::AffordableLot
        } else {
            ConditionKey::NearbyGarage
        }
    } else if inputs.enforced {
        ConditionKey::NoCost
    } else {
        ConditionKey::FreeStreet
    }
}

pub fn declines_walking(walk_miles: f64) -> bool {
    walk_miles <= 0.0
}

pub fn declines_paying(cost_dollars: f64) -> bool {
    cost_dollars <= 0.0
}

pub fn can_afford(cost_dollars: f64, price_dollars: f64) -> bool {
    cost_dollars >= price_dollars
}

fn walk_condition(inputs: &PolicyInputs) -> ConditionKey {
    if declines_walking(inputs.walk_miles) {
        ConditionKey::NoWalk
    } else {
        ConditionKey::Default
    }
}

fn fare_condition(inputs: &PolicyInputs, fare_dollars: f64) -> ConditionKey {
    if can_afford(inputs.cost_dollars, fare_dollars) {
        ConditionKey::Default
    } else {
        ConditionKey::NoCost
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn drive(walk_miles: f64, cost_dollars: f64, enforced: bool) -> ConditionKey {
        let inputs = PolicyInputs {
            walk_miles,
            cost_dollars,
            enforced,
        };
        drive_condition(&inputs, &PolicyThresholds::default())
    }

    fn other(combo: ModeCombo, walk_miles: f64, cost_dollars: f64) -> ConditionKey {
        let inputs = PolicyInputs {
            walk_miles,
            cost_dollars,
            enforced: true,
        };
        evaluate(combo, &inputs, &PolicyThresholds::default())
    }

    #[test]
    fn test_drive_no_walk_comes_first() {
        assert_eq!(drive(0.0, 0.0, true), ConditionKey::NoWalk);
        assert_eq!(drive(0.0, 50.0, false), ConditionKey::NoWalk);
    }

    #[test]
    fn test_drive_enforced() {
        assert_eq!(drive(0.5, 0.0, true), ConditionKey::NoCost);
        assert_eq!(drive(0.5, 5.0, true), ConditionKey::NoCost);
        assert_eq!(drive(0.5, 8.0, true), ConditionKey::AffordableLot);
        assert_eq!(drive(0.5, 10.0, true), ConditionKey::AffordableLot);
        assert_eq!(drive(0.2, 10.0, true), ConditionKey::NearbyGarage);
        assert_eq!(drive(0.5, 20.0, true), ConditionKey::PremiumRamp);
        assert_eq!(drive(0.1, 25.0, true), ConditionKey::PremiumRamp);
    }

    #[test]
    fn test_drive_meters_off() {
        assert_eq!(drive(0.5, 0.0, false), ConditionKey::FreeStreet);
        assert_eq!(drive(0.5, 5.0, false), ConditionKey::FreeStreet);
        assert_eq!(drive(0.5, 10.0, false), ConditionKey::AffordableLot);
        assert_eq!(drive(0.3, 10.0, false), ConditionKey::NearbyGarage);
        assert_eq!(drive(1.0, 30.0, false), ConditionKey::PremiumRamp);
    }

    #[test]
    fn test_transit() {
        for combo in [ModeCombo::Transit, ModeCombo::TransitShuttle] {
            assert_eq!(other(combo, 0.0, 1.0), ConditionKey::NoCost);
            assert_eq!(other(combo, 0.0, 2.0), ConditionKey::NoWalk);
            assert_eq!(other(combo, 0.5, 2.0), ConditionKey::Default);
        }
    }

    #[test]
    fn test_walk_only_combinations() {
        for combo in [
            ModeCombo::DriveShuttle,
            ModeCombo::DriveTransit,
            ModeCombo::DriveMicromobility,
            ModeCombo::Shuttle,
        ] {
            assert_eq!(other(combo, 0.0, 100.0), ConditionKey::NoWalk);
            assert_eq!(other(combo, 0.1, 0.0), ConditionKey::Default);
        }
    }

    #[test]
    fn test_fares() {
        assert_eq!(other(ModeCombo::Rideshare, 0.0, 9.99), ConditionKey::NoCost);
        assert_eq!(other(ModeCombo::Rideshare, 0.0, 10.0), ConditionKey::Default);
        assert_eq!(other(ModeCombo::Micromobility, 0.5, 3.5), ConditionKey::NoCost);
        assert_eq!(other(ModeCombo::Micromobility, 0.5, 4.0), ConditionKey::Default);
        assert_eq!(other(ModeCombo::Bike, 0.0, 0.0), ConditionKey::Default);
    }

    #[test]
    fn test_every_condition_is_declared_by_its_combination() {
        let grid = [0.0, 0.2, 0.5, 1.0];
        let costs = [0.0, 1.0, 3.0, 5.0, 8.0, 12.0, 20.0, 40.0];
        for combo in ModeCombo::PRIORITY {
            for walk_miles in grid {
                for cost_dollars in costs {
                    for enforced in [true, false] {
                        let inputs = PolicyInputs {
                            walk_miles,
                            cost_dollars,
                            enforced,
                        };
                        let condition = evaluate(combo, &inputs, &PolicyThresholds::default());
                        assert!(
                            combo.conditions().contains(&condition),
                            "{combo} produced undeclared condition {condition}"
                        );
                    }
                }
            }
        }
    }
}
