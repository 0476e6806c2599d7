use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use super::SelectionError;

/// a means of travel the user can select. declaration order carries no
/// priority; recommendation priority is defined by the mode combination list.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ModeTag {
    Drive,
    Rideshare,
    Transit,
    Micromobility,
    Shuttle,
    Bike,
}

impl ModeTag {
    pub const ALL: [ModeTag; 6] = [
        ModeTag::Drive,
        ModeTag::Rideshare,
        ModeTag::Transit,
        ModeTag::Micromobility,
        ModeTag::Shuttle,
        ModeTag::Bike,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModeTag::Drive => "drive",
            ModeTag::Rideshare => "rideshare",
            ModeTag::Transit => "transit",
            ModeTag::Micromobility => "micromobility",
            ModeTag::Shuttle => "shuttle",
            ModeTag::Bike => "bike",
        }
    }

    /// user-facing name of the service behind each mode.
    pub fn label(&self) -> &'static str {
        match self {
            ModeTag::Drive => "driving",
            ModeTag::Rideshare => "Uber/Lyft",
            ModeTag::Transit => "The Rapid",
            ModeTag::Micromobility => "Lime",
            ModeTag::Shuttle => "DASH",
            ModeTag::Bike => "biking",
        }
    }
}

impl FromStr for ModeTag {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        ModeTag::ALL
            .into_iter()
            .find(|m| m.as_str() == tag)
            .ok_or_else(|| SelectionError::InvalidMode(s.to_string()))
    }
}

impl Display for ModeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_tags() {
        for mode in ModeTag::ALL {
            assert_eq!(ModeTag::from_str(mode.as_str()).unwrap(), mode);
        }
        assert_eq!(ModeTag::from_str(" Drive ").unwrap(), ModeTag::Drive);
    }

    #[test]
    fn test_parse_unknown_tag() {
        let result = ModeTag::from_str("walk");
        assert_eq!(result, Err(SelectionError::InvalidMode(String::from("walk"))));
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&ModeTag::Micromobility).unwrap();
        assert_eq!(json, r#""micromobility""#);
    }
}
