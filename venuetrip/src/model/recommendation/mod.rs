mod condition_key;
mod engine;
mod engine_config;
mod error;
mod mode_combo;
mod placeholder;
pub mod policy_ops;
mod policy_thresholds;
mod recommendation;
mod rule;
mod rule_table;

pub use condition_key::ConditionKey;
pub use engine::RecommendationEngine;
pub use engine_config::{CandidateOrdering, EngineConfig, FallbackPolicy};
pub use error::{RecommendationError, RuleTableError};
pub use mode_combo::ModeCombo;
pub use placeholder::PlaceholderValues;
pub use policy_ops::PolicyInputs;
pub use policy_thresholds::PolicyThresholds;
pub use recommendation::{Outcome, Recommendation, RecommendationPair, Step};
pub use rule::{RecommendationRule, StepTemplate};
pub use rule_table::{RuleTable, RuleTableConfig, EMBEDDED_RULES};
