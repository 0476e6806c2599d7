use venuetrip_core::model::TripSelection;

use super::{
    policy_ops, CandidateOrdering, EngineConfig, FallbackPolicy, ModeCombo, Outcome,
    PlaceholderValues, PolicyInputs, RecommendationError, RecommendationPair, RuleTable,
};

/// picks a strategy for a trip selection and renders it from the rule table.
/// the engine holds no state between calls and never reads the clock, so the
/// same selection always gets the same answer.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    rules: RuleTable,
    config: EngineConfig,
}

impl RecommendationEngine {
    /// build an engine, failing if the rule table cannot answer every
    /// combination and condition the sub-policies can produce.
    pub fn new(rules: RuleTable, config: EngineConfig) -> Result<RecommendationEngine, RecommendationError> {
        rules.ensure_complete()?;
        Ok(RecommendationEngine { rules, config })
    }

    pub fn with_default_rules(config: EngineConfig) -> Result<RecommendationEngine, RecommendationError> {
        let rules = RuleTable::embedded()?;
        RecommendationEngine::new(rules, config)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// the applicable mode combinations for this selection, in the order they
    /// are tried.
    pub fn candidates(&self, selection: &TripSelection) -> Vec<ModeCombo> {
        let mut candidates = ModeCombo::candidates(&selection.modes);
        if let (CandidateOrdering::PrimaryModeFirst, Some(primary)) =
            (self.config.candidate_ordering, selection.primary_mode())
        {
            // stable, so priority order holds within each group
            candidates.sort_by_key(|combo| !combo.modes().contains(&primary));
        }
        candidates
    }

    /// decide which rule applies, without rendering it. `None` when no mode is
    /// selected.
    pub fn resolve_outcome(&self, selection: &TripSelection) -> Option<Outcome> {
        let enforced = self
            .config
            .enforcement
            .is_enforced(&selection.day, selection.time.as_ref());
        let inputs = PolicyInputs::new(selection, enforced);
        log::debug!(
            "resolving outcome for modes '{}' with {inputs:?}",
            selection.modes.to_delimited()
        );

        let mut outcomes = self.candidates(selection).into_iter().map(|combo| {
            let condition = policy_ops::evaluate(combo, &inputs, &self.config.thresholds);
            log::debug!("candidate {combo} has condition {condition}");
            Outcome::new(combo, condition)
        });
        let first = outcomes.next()?;
        let outcome = match self.config.fallback_policy {
            FallbackPolicy::Strict => first,
            FallbackPolicy::NextViable if first.is_feasible() => first,
            FallbackPolicy::NextViable => outcomes.find(Outcome::is_feasible).unwrap_or(first),
        };
        log::debug!("selected {}.{}", outcome.combo, outcome.condition);
        Some(outcome)
    }

    /// the rendered recommendation (and alternate, if the rule has one) for a
    /// selection. an empty pair when no mode is selected.
    pub fn build_recommendation(
        &self,
        selection: &TripSelection,
    ) -> Result<RecommendationPair, RecommendationError> {
        let Some(outcome) = self.resolve_outcome(selection) else {
            return Ok(RecommendationPair::empty());
        };
        let rule = self.rules.get(outcome.combo, outcome.condition)?;
        let values = PlaceholderValues::new(selection, &self.config.destination);
        let (primary, alternate) = rule.render_pair(&values);
        Ok(RecommendationPair {
            primary: Some(primary),
            alternate,
            outcome: Some(outcome),
        })
    }
}
