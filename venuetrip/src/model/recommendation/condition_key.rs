use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// the situation a sub-policy found the selection in. together with a
/// [`super::ModeCombo`] this names one rule in the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConditionKey {
    Default,
    NoWalk,
    NoCost,
    FreeStreet,
    AffordableLot,
    NearbyGarage,
    PremiumRamp,
}

impl ConditionKey {
    pub const ALL: [ConditionKey; 7] = [
        ConditionKey::Default,
        ConditionKey::NoWalk,
        ConditionKey::NoCost,
        ConditionKey::FreeStreet,
        ConditionKey::AffordableLot,
        ConditionKey::NearbyGarage,
        ConditionKey::PremiumRamp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionKey::Default => "default",
            ConditionKey::NoWalk => "noWalk",
            ConditionKey::NoCost => "noCost",
            ConditionKey::FreeStreet => "freeStreet",
            ConditionKey::AffordableLot => "affordableLot",
            ConditionKey::NearbyGarage => "nearbyGarage",
            ConditionKey::PremiumRamp => "premiumRamp",
        }
    }

    /// conditions where the user's limits rule the combination out.
    pub fn is_no_options(&self) -> bool {
        matches!(self, ConditionKey::NoWalk | ConditionKey::NoCost)
    }
}

impl FromStr for ConditionKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConditionKey::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown condition '{s}'"))
    }
}

impl Display for ConditionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_matches_serde_names() {
        for condition in ConditionKey::ALL {
            let json = serde_json::to_string(&condition).unwrap();
            assert_eq!(json, format!("\"{condition}\""));
            assert_eq!(ConditionKey::from_str(condition.as_str()).unwrap(), condition);
        }
        assert!(ConditionKey::from_str("NoWalk").is_err());
    }

    #[test]
    fn test_no_options() {
        assert!(ConditionKey::NoWalk.is_no_options());
        assert!(ConditionKey::NoCost.is_no_options());
        assert!(!ConditionKey::FreeStreet.is_no_options());
        assert!(!ConditionKey::Default.is_no_options());
    }
}
