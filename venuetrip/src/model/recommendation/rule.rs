use serde::{Deserialize, Serialize};

use super::{ConditionKey, ModeCombo, PlaceholderValues, Recommendation, RuleTableError, Step};

/// a recommendation as written in a rule table, with `{token}` placeholders
/// still in place.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RecommendationRule {
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
    #[serde(default)]
    pub is_no_options: bool,
    #[serde(default)]
    pub is_discouraged: bool,
    #[serde(default)]
    pub steps: Vec<StepTemplate>,
    /// a second strategy shown alongside this one. alternates do not nest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate: Option<Box<RecommendationRule>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StepTemplate {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_text: Option<String>,
}

impl RecommendationRule {
    /// fill in the placeholders of this rule, leaving out the alternate.
    pub fn render(&self, values: &PlaceholderValues) -> Recommendation {
        Recommendation {
            title: values.substitute(&self.title),
            body: values.substitute(&self.body),
            badge: values.substitute_opt(self.badge.as_ref()),
            is_no_options: self.is_no_options,
            is_discouraged: self.is_discouraged,
            steps: self.steps.iter().map(|s| s.render(values)).collect(),
            meta: values.substitute_opt(self.meta.as_ref()),
        }
    }

    /// render this rule and its alternate, if it declares one.
    pub fn render_pair(&self, values: &PlaceholderValues) -> (Recommendation, Option<Recommendation>) {
        let primary = self.render(values);
        let alternate = self.alternate.as_ref().map(|alt| alt.render(values));
        (primary, alternate)
    }

    /// reject rules that cannot be shown: empty titles anywhere, and
    /// alternates that declare alternates of their own.
    pub fn validate(&self, combo: ModeCombo, condition: ConditionKey) -> Result<(), RuleTableError> {
        self.validate_fields(combo, condition)?;
        if let Some(alternate) = &self.alternate {
            if alternate.alternate.is_some() {
                return Err(RuleTableError::NestedAlternate { combo, condition });
            }
            alternate.validate_fields(combo, condition)?;
        }
        Ok(())
    }

    fn validate_fields(&self, combo: ModeCombo, condition: ConditionKey) -> Result<(), RuleTableError> {
        let empty = |field: &str| RuleTableError::EmptyField {
            combo,
            condition,
            field: field.to_string(),
        };
        if self.title.trim().is_empty() {
            return Err(empty("title"));
        }
        for (idx, step) in self.steps.iter().enumerate() {
            if step.title.trim().is_empty() {
                return Err(empty(&format!("steps[{idx}].title")));
            }
        }
        Ok(())
    }
}

impl StepTemplate {
    pub fn render(&self, values: &PlaceholderValues) -> Step {
        Step {
            title: values.substitute(&self.title),
            description: values.substitute_opt(self.description.as_ref()),
            link: values.substitute_opt(self.link_template.as_ref()),
            link_text: values.substitute_opt(self.link_text.as_ref()),
        }
    }
}
