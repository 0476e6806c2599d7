use itertools::Itertools;
use venuetrip_core::model::SelectionError;

use super::{ConditionKey, ModeCombo};

#[derive(thiserror::Error, Debug)]
pub enum RuleTableError {
    #[error("failure reading rule table file '{path}': {message}")]
    ReadFailure { path: String, message: String },
    #[error("failure parsing rule table '{source_name}': {message}")]
    ParseFailure {
        source_name: String,
        message: String,
    },
    #[error("unknown mode combination '{0}' in rule table")]
    UnknownCombination(String),
    #[error("unknown condition '{condition}' for mode combination '{combo}'")]
    UnknownCondition { combo: String, condition: String },
    #[error("mode combination '{combo}' is declared twice, as '{first}' and '{second}'")]
    DuplicateCombination {
        combo: String,
        first: String,
        second: String,
    },
    #[error("rule {combo}.{condition} has an empty '{field}'")]
    EmptyField {
        combo: ModeCombo,
        condition: ConditionKey,
        field: String,
    },
    #[error("rule {combo}.{condition} declares an alternate that itself has an alternate")]
    NestedAlternate {
        combo: ModeCombo,
        condition: ConditionKey,
    },
    #[error("rule table is missing rules for: {}", display_missing(.0))]
    MissingRules(Vec<(ModeCombo, ConditionKey)>),
}

#[derive(thiserror::Error, Debug)]
pub enum RecommendationError {
    #[error("no rule configured for mode combination '{combo}' under condition '{condition}'")]
    MissingRule {
        combo: ModeCombo,
        condition: ConditionKey,
    },
    #[error(transparent)]
    RuleTable(#[from] RuleTableError),
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error("{0}")]
    InvalidUserInput(String),
    #[error("failure serializing output: {0}")]
    SerializationError(String),
}

fn display_missing(missing: &[(ModeCombo, ConditionKey)]) -> String {
    missing
        .iter()
        .map(|(combo, condition)| format!("{combo}.{condition}"))
        .join(", ")
}
