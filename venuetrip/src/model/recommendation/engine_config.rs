use serde::{Deserialize, Serialize};
use venuetrip_core::model::EnforcementSchedule;

use super::PolicyThresholds;
use crate::model::DestinationContext;

/// what to do when the highest-priority mode combination is ruled out by the
/// user's limits.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// try the next applicable combination, in order, until one is feasible
    #[default]
    NextViable,
    /// report the first applicable combination, even when it has no options
    Strict,
}

/// the order applicable mode combinations are tried in.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum CandidateOrdering {
    /// the fixed combination priority, with driving first
    #[default]
    FixedPriority,
    /// combinations holding the first-selected mode come first
    PrimaryModeFirst,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub thresholds: PolicyThresholds,
    pub enforcement: EnforcementSchedule,
    pub fallback_policy: FallbackPolicy,
    pub candidate_ordering: CandidateOrdering,
    pub destination: DestinationContext,
}
