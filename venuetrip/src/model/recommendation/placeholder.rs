use std::sync::LazyLock;

use regex::{Captures, Regex};
use venuetrip_core::model::TripSelection;

use crate::model::DestinationContext;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([A-Za-z][A-Za-z0-9_]*)\}").expect("placeholder regex")
});

/// the values a rule's `{token}` placeholders are filled with.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderValues {
    pub destination: String,
    pub destination_encoded: String,
    pub walk_miles: f64,
    pub people: u8,
}

impl PlaceholderValues {
    pub fn new(selection: &TripSelection, context: &DestinationContext) -> PlaceholderValues {
        PlaceholderValues {
            destination: selection.destination.clone(),
            destination_encoded: context.encoded(&selection.destination),
            walk_miles: selection.walk_miles,
            people: selection.people,
        }
    }

    fn lookup(&self, token: &str) -> Option<String> {
        match token {
            "destination" => Some(self.destination.clone()),
            "destinationEncoded" => Some(self.destination_encoded.clone()),
            "walkMiles" => Some(format!("{:.1}", round_tenths(self.walk_miles))),
            "people" => Some(self.people.to_string()),
            _ => None,
        }
    }

    /// replace every known `{token}` in the template. unknown tokens are left
    /// in place so a typo in a rule shows up in the output.
    pub fn substitute(&self, template: &str) -> String {
        PLACEHOLDER
            .replace_all(template, |caps: &Captures| {
                self.lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }

    pub fn substitute_opt(&self, template: Option<&String>) -> Option<String> {
        template.map(|t| self.substitute(t))
    }
}

/// round to one decimal place with halves going away from zero, so 0.25 miles
/// shows as 0.3.
fn round_tenths(miles: f64) -> f64 {
    (miles * 10.0).round() / 10.0
}
