use std::fmt::Display;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// the arrival day as selected by the user. relative tokens are never resolved
/// against a calendar; the enforcement calculator reasons about them as weekdays.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DayToken {
    #[default]
    Unset,
    Today,
    Tomorrow,
    Weekday(Weekday),
    /// any other token, kept verbatim (for example "next week" from a shared link)
    Other(String),
}

impl DayToken {
    /// parse a raw day token. matching is case-insensitive and never fails.
    pub fn parse(raw: &str) -> DayToken {
        let token = raw.trim().to_ascii_lowercase();
        match token.as_str() {
            "" => DayToken::Unset,
            "today" => DayToken::Today,
            "tomorrow" => DayToken::Tomorrow,
            _ => match token.parse::<Weekday>() {
                Ok(weekday) => DayToken::Weekday(weekday),
                Err(_) => DayToken::Other(raw.trim().to_string()),
            },
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, DayToken::Unset)
    }

    /// the explicit weekday, if the token names one.
    pub fn weekday(&self) -> Option<Weekday> {
        match self {
            DayToken::Weekday(weekday) => Some(*weekday),
            _ => None,
        }
    }
}

fn weekday_name(weekday: &Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

impl From<&str> for DayToken {
    fn from(value: &str) -> Self {
        DayToken::parse(value)
    }
}

impl From<String> for DayToken {
    fn from(value: String) -> Self {
        DayToken::parse(&value)
    }
}

impl From<DayToken> for String {
    fn from(value: DayToken) -> Self {
        value.to_string()
    }
}

impl Display for DayToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayToken::Unset => write!(f, ""),
            DayToken::Today => write!(f, "today"),
            DayToken::Tomorrow => write!(f, "tomorrow"),
            DayToken::Weekday(weekday) => write!(f, "{}", weekday_name(weekday)),
            DayToken::Other(token) => write!(f, "{token}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_relative_tokens() {
        assert_eq!(DayToken::parse(""), DayToken::Unset);
        assert_eq!(DayToken::parse("  "), DayToken::Unset);
        assert_eq!(DayToken::parse("today"), DayToken::Today);
        assert_eq!(DayToken::parse("Tomorrow"), DayToken::Tomorrow);
    }

    #[test]
    fn test_parse_weekdays_case_insensitive() {
        assert_eq!(DayToken::parse("saturday"), DayToken::Weekday(Weekday::Sat));
        assert_eq!(DayToken::parse("SUNDAY"), DayToken::Weekday(Weekday::Sun));
        assert_eq!(DayToken::parse("Wednesday"), DayToken::Weekday(Weekday::Wed));
    }

    #[test]
    fn test_unknown_token_kept_verbatim() {
        let day = DayToken::parse("next week");
        assert_eq!(day, DayToken::Other(String::from("next week")));
        assert_eq!(day.to_string(), "next week");
        assert_eq!(day.weekday(), None);
    }

    #[test]
    fn test_display_uses_full_lowercase_names() {
        assert_eq!(DayToken::Weekday(Weekday::Thu).to_string(), "thursday");
        assert_eq!(DayToken::Unset.to_string(), "");
    }
}
