use std::path::Path;

use indexmap::IndexMap;

use super::{ConditionKey, ModeCombo, RecommendationError, RecommendationRule, RuleTableError};

/// the default rules, compiled into the binary.
pub const EMBEDDED_RULES: &str = include_str!("default_rules.toml");
const EMBEDDED_SOURCE_NAME: &str = "embedded default rules";

/// a rule table as written in a file: mode combination key, then condition
/// key, then the rule.
pub type RuleTableConfig = IndexMap<String, IndexMap<String, RecommendationRule>>;

/// a validated rule table, keyed by typed mode combination and condition.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: IndexMap<(ModeCombo, ConditionKey), RecommendationRule>,
}

impl RuleTable {
    pub fn embedded() -> Result<RuleTable, RuleTableError> {
        RuleTable::from_toml_str(EMBEDDED_RULES, EMBEDDED_SOURCE_NAME)
    }

    pub fn from_toml_str(contents: &str, source_name: &str) -> Result<RuleTable, RuleTableError> {
        let config: RuleTableConfig =
            toml::from_str(contents).map_err(|e| RuleTableError::ParseFailure {
                source_name: source_name.to_string(),
                message: e.to_string(),
            })?;
        RuleTable::try_from(config)
    }

    pub fn from_json_str(contents: &str, source_name: &str) -> Result<RuleTable, RuleTableError> {
        let config: RuleTableConfig =
            serde_json::from_str(contents).map_err(|e| RuleTableError::ParseFailure {
                source_name: source_name.to_string(),
                message: e.to_string(),
            })?;
        RuleTable::try_from(config)
    }

    /// read a rule table file. files ending in `.json` are read as JSON, all
    /// others as TOML.
    pub fn from_file(path: &Path) -> Result<RuleTable, RuleTableError> {
        let source_name = path.to_string_lossy().to_string();
        let contents = std::fs::read_to_string(path).map_err(|e| RuleTableError::ReadFailure {
            path: source_name.clone(),
            message: e.to_string(),
        })?;
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or_default();
        let table = if is_json {
            RuleTable::from_json_str(&contents, &source_name)?
        } else {
            RuleTable::from_toml_str(&contents, &source_name)?
        };
        log::info!("loaded {} rules from '{source_name}'", table.len());
        Ok(table)
    }

    /// read a rule table file, falling back to the embedded rules when the file
    /// cannot be read or parsed. a file that parses but holds invalid rules is
    /// still an error.
    pub fn from_file_or_embedded(path: Option<&Path>) -> Result<RuleTable, RuleTableError> {
        let Some(path) = path else {
            return RuleTable::embedded();
        };
        match RuleTable::from_file(path) {
            Ok(table) => Ok(table),
            Err(e @ (RuleTableError::ReadFailure { .. } | RuleTableError::ParseFailure { .. })) => {
                log::warn!("{e}, using embedded default rules instead");
                RuleTable::embedded()
            }
            Err(e) => Err(e),
        }
    }

    pub fn get(
        &self,
        combo: ModeCombo,
        condition: ConditionKey,
    ) -> Result<&RecommendationRule, RecommendationError> {
        self.rules
            .get(&(combo, condition))
            .ok_or(RecommendationError::MissingRule { combo, condition })
    }

    /// every (combination, condition) pair a sub-policy can produce that has
    /// no rule, in priority order.
    pub fn missing_rules(&self) -> Vec<(ModeCombo, ConditionKey)> {
        ModeCombo::PRIORITY
            .into_iter()
            .flat_map(|combo| combo.conditions().iter().map(move |c| (combo, *c)))
            .filter(|key| !self.rules.contains_key(key))
            .collect()
    }

    pub fn ensure_complete(&self) -> Result<(), RuleTableError> {
        let missing = self.missing_rules();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(RuleTableError::MissingRules(missing))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(ModeCombo, ConditionKey), &RecommendationRule)> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl TryFrom<RuleTableConfig> for RuleTable {
    type Error = RuleTableError;

    fn try_from(config: RuleTableConfig) -> Result<Self, Self::Error> {
        let mut declared: IndexMap<ModeCombo, String> = IndexMap::new();
        let mut rules = IndexMap::new();
        for (combo_key, conditions) in config.into_iter() {
            let combo: ModeCombo = combo_key.parse()?;
            if let Some(first) = declared.get(&combo) {
                return Err(RuleTableError::DuplicateCombination {
                    combo: combo.key(),
                    first: first.clone(),
                    second: combo_key,
                });
            }
            for (condition_key, rule) in conditions.into_iter() {
                let condition: ConditionKey =
                    condition_key
                        .parse()
                        .map_err(|_| RuleTableError::UnknownCondition {
                            combo: combo_key.clone(),
                            condition: condition_key.clone(),
                        })?;
                rule.validate(combo, condition)?;
                if !combo.conditions().contains(&condition) {
                    log::warn!("rule {combo}.{condition} can never be selected");
                }
                rules.insert((combo, condition), rule);
            }
            declared.insert(combo, combo_key);
        }
        Ok(RuleTable { rules })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_embedded_rules_are_complete() {
        let table = RuleTable::embedded().unwrap();
        assert!(table.missing_rules().is_empty(), "{:?}", table.missing_rules());
        assert_eq!(table.len(), 25);
        let premium = table.get(ModeCombo::Drive, ConditionKey::PremiumRamp).unwrap();
        assert!(premium.alternate.is_some());
        for ((_, condition), rule) in table.iter() {
            assert_eq!(rule.is_no_options, condition.is_no_options(), "{}", rule.title);
        }
    }

    #[test]
    fn test_combo_keys_normalized() {
        let toml = r#"
            ["shuttle+drive".noWalk]
            title = "Walking is required"

            ["shuttle+drive".default]
            title = "Park and ride the shuttle"
        "#;
        let table = RuleTable::from_toml_str(toml, "test").unwrap();
        assert!(table.get(ModeCombo::DriveShuttle, ConditionKey::Default).is_ok());
    }

    #[test]
    fn test_duplicate_combination() {
        let json = r#"{
            "drive+shuttle": { "default": { "title": "a" } },
            "shuttle+drive": { "noWalk": { "title": "b" } }
        }"#;
        let result = RuleTable::from_json_str(json, "test");
        assert!(matches!(result, Err(RuleTableError::DuplicateCombination { .. })));
    }

    #[test]
    fn test_unknown_keys() {
        let json = r#"{ "walk": { "default": { "title": "a" } } }"#;
        let result = RuleTable::from_json_str(json, "test");
        assert!(matches!(result, Err(RuleTableError::UnknownCombination(_))));

        let json = r#"{ "bike": { "sunny": { "title": "a" } } }"#;
        let result = RuleTable::from_json_str(json, "test");
        assert!(matches!(result, Err(RuleTableError::UnknownCondition { .. })));
    }

    #[test]
    fn test_missing_rules_reported_together() {
        let json = r#"{
            "bike": { "default": { "title": "Bike there" } },
            "rideshare": { "default": { "title": "Take a ride" } }
        }"#;
        let table = RuleTable::from_json_str(json, "test").unwrap();
        let missing = table.missing_rules();
        assert_eq!(missing.len(), 23);
        assert_eq!(missing[0], (ModeCombo::DriveShuttle, ConditionKey::NoWalk));
        assert!(missing.contains(&(ModeCombo::Rideshare, ConditionKey::NoCost)));
        match table.ensure_complete() {
            Err(e @ RuleTableError::MissingRules(_)) => {
                assert!(e.to_string().contains("rideshare.noCost"));
            }
            other => panic!("expected missing rules, found {other:?}"),
        }
        let result = table.get(ModeCombo::Shuttle, ConditionKey::NoWalk);
        assert!(matches!(result, Err(RecommendationError::MissingRule { .. })));
    }

    #[test]
    fn test_unreachable_condition_accepted() {
        let json = r#"{ "bike": { "noCost": { "title": "Never shown" } } }"#;
        let table = RuleTable::from_json_str(json, "test").unwrap();
        assert!(table.get(ModeCombo::Bike, ConditionKey::NoCost).is_ok());
    }

    #[test]
    fn test_parse_failure() {
        let result = RuleTable::from_toml_str("[drive", "broken");
        assert!(matches!(result, Err(RuleTableError::ParseFailure { .. })));
    }

    #[test]
    fn test_unreadable_file_falls_back_to_embedded() {
        let path = Path::new("does/not/exist/rules.toml");
        assert!(matches!(
            RuleTable::from_file(path),
            Err(RuleTableError::ReadFailure { .. })
        ));
        let table = RuleTable::from_file_or_embedded(Some(path)).unwrap();
        assert_eq!(table.len(), 25);
    }
}
