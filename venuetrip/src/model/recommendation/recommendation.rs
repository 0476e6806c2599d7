use serde::{Deserialize, Serialize};

use super::{ConditionKey, ModeCombo};

/// a rendered strategy, ready to show to the user.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub is_no_options: bool,
    pub is_discouraged: bool,
    pub steps: Vec<Step>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_text: Option<String>,
}

/// which rule produced a recommendation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub combo: ModeCombo,
    pub condition: ConditionKey,
}

impl Outcome {
    pub fn new(combo: ModeCombo, condition: ConditionKey) -> Outcome {
        Outcome { combo, condition }
    }

    /// false when the user's limits rule this combination out.
    pub fn is_feasible(&self) -> bool {
        !self.condition.is_no_options()
    }
}

/// the engine's answer for one selection. all fields are empty when no mode
/// is selected; otherwise there is always a primary recommendation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationPair {
    pub primary: Option<Recommendation>,
    pub alternate: Option<Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
}

impl RecommendationPair {
    pub fn empty() -> RecommendationPair {
        RecommendationPair::default()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_none()
    }
}
