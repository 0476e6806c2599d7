use std::{fmt::Display, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use venuetrip_core::model::{ModeSet, ModeTag};

use super::{ConditionKey, RuleTableError};

/// a combination of travel modes that has its own recommendation strategy.
/// the declaration order of [`ModeCombo::PRIORITY`] is the decision order:
/// the first combination whose modes are all selected wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ModeCombo {
    DriveShuttle,
    DriveTransit,
    DriveMicromobility,
    Drive,
    TransitShuttle,
    Transit,
    Rideshare,
    Micromobility,
    Shuttle,
    Bike,
}

impl ModeCombo {
    pub const PRIORITY: [ModeCombo; 10] = [
        ModeCombo::DriveShuttle,
        ModeCombo::DriveTransit,
        ModeCombo::DriveMicromobility,
        ModeCombo::Drive,
        ModeCombo::TransitShuttle,
        ModeCombo::Transit,
        ModeCombo::Rideshare,
        ModeCombo::Micromobility,
        ModeCombo::Shuttle,
        ModeCombo::Bike,
    ];

    pub fn modes(&self) -> &'static [ModeTag] {
        use ModeTag as M;
        match self {
            ModeCombo::DriveShuttle => &[M::Drive, M::Shuttle],
            ModeCombo::DriveTransit => &[M::Drive, M::Transit],
            ModeCombo::DriveMicromobility => &[M::Drive, M::Micromobility],
            ModeCombo::Drive => &[M::Drive],
            ModeCombo::TransitShuttle => &[M::Transit, M::Shuttle],
            ModeCombo::Transit => &[M::Transit],
            ModeCombo::Rideshare => &[M::Rideshare],
            ModeCombo::Micromobility => &[M::Micromobility],
            ModeCombo::Shuttle => &[M::Shuttle],
            ModeCombo::Bike => &[M::Bike],
        }
    }

    /// the key this combination is written under in a rule table.
    pub fn key(&self) -> String {
        self.modes().iter().map(ModeTag::as_str).join("+")
    }

    /// order-independent form of the combination, used to match rule table keys
    /// such as "shuttle+drive" against "drive+shuttle".
    pub fn signature(&self) -> Vec<ModeTag> {
        self.modes().iter().copied().sorted().collect()
    }

    /// every condition the sub-policy for this combination can produce. a
    /// complete rule table has exactly one rule for each of these.
    pub fn conditions(&self) -> &'static [ConditionKey] {
        use ConditionKey as C;
        match self {
            ModeCombo::Drive => &[
                C::NoWalk,
                C::NoCost,
                C::FreeStreet,
                C::AffordableLot,
                C::NearbyGarage,
                C::PremiumRamp,
            ],
            ModeCombo::DriveShuttle
            | ModeCombo::DriveTransit
            | ModeCombo::DriveMicromobility
            | ModeCombo::Shuttle => &[C::NoWalk, C::Default],
            ModeCombo::TransitShuttle | ModeCombo::Transit => &[C::NoCost, C::NoWalk, C::Default],
            ModeCombo::Rideshare | ModeCombo::Micromobility => &[C::NoCost, C::Default],
            ModeCombo::Bike => &[C::Default],
        }
    }

    /// whether all of this combination's modes are selected. other selected
    /// modes do not matter.
    pub fn is_applicable(&self, modes: &ModeSet) -> bool {
        modes.contains_all(self.modes())
    }

    /// the applicable combinations for a selection, in priority order.
    pub fn candidates(modes: &ModeSet) -> Vec<ModeCombo> {
        ModeCombo::PRIORITY
            .into_iter()
            .filter(|combo| combo.is_applicable(modes))
            .collect()
    }
}

impl FromStr for ModeCombo {
    type Err = RuleTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || RuleTableError::UnknownCombination(s.to_string());
        let tags: Vec<ModeTag> = s
            .split('+')
            .map(|tag| tag.parse::<ModeTag>())
            .collect::<Result<_, _>>()
            .map_err(|_| unknown())?;
        let signature: Vec<ModeTag> = tags.into_iter().sorted().dedup().collect();
        ModeCombo::PRIORITY
            .into_iter()
            .find(|combo| combo.signature() == signature)
            .ok_or_else(unknown)
    }
}

impl TryFrom<String> for ModeCombo {
    type Error = RuleTableError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ModeCombo::from_str(&value)
    }
}

impl From<ModeCombo> for String {
    fn from(value: ModeCombo) -> Self {
        value.key()
    }
}

impl Display for ModeCombo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
