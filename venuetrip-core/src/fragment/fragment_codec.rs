use serde::{Deserialize, Serialize};

use super::{decode_time, encode_time};
use crate::model::{
    ClockTime, DayToken, ModeSet, SelectionDefaults, SelectionError, TripSelection, MAX_PEOPLE,
    MIN_PEOPLE,
};

pub const MODES_KEY: &str = "modes";
pub const DAY_KEY: &str = "day";
pub const TIME_KEY: &str = "time";
pub const PEOPLE_KEY: &str = "people";
pub const WALK_KEY: &str = "walk";
pub const PAY_KEY: &str = "pay";

/// which selection fields the user has set. only these (and the modes) are
/// written back into the link, so a shared link never pins a value the user
/// left at its default.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ChangedFields {
    pub day: bool,
    pub time: bool,
    pub people: bool,
    pub walk: bool,
    pub cost: bool,
}

impl ChangedFields {
    /// forget every change, as when the selection is reset to its defaults.
    pub fn clear(&mut self) {
        *self = ChangedFields::default();
    }
}

/// the values read from a link fragment. a key that is absent or whose value
/// could not be read is `None`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FragmentParams {
    pub modes: Option<ModeSet>,
    pub day: Option<DayToken>,
    pub time: Option<ClockTime>,
    pub people: Option<u8>,
    pub walk_miles: Option<f64>,
    pub cost_dollars: Option<f64>,
}

/// read a fragment such as `#modes=drive,transit&day=friday&time=1730&people=2`.
///
/// this never fails. pairs with an empty key or value are skipped, unknown
/// keys and mode tags are dropped, and values that cannot be read are logged
/// and ignored.
pub fn parse_fragment(fragment: &str) -> FragmentParams {
    let mut params = FragmentParams::default();
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    for pair in fragment.split('&') {
        let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
        if key.is_empty() || raw.is_empty() {
            continue;
        }
        let value = match urlencoding::decode(raw) {
            Ok(v) => v.into_owned(),
            Err(e) => {
                log::warn!("ignoring fragment value for '{key}', not valid utf-8: {e}");
                continue;
            }
        };
        if let Err(e) = read_pair(&mut params, key, &value) {
            log::warn!("ignoring fragment value: {e}");
        }
    }
    params
}

fn read_pair(params: &mut FragmentParams, key: &str, value: &str) -> Result<(), SelectionError> {
    match key {
        MODES_KEY => {
            let modes = ModeSet::from_delimited(value);
            if !modes.is_empty() {
                params.modes = Some(modes);
            }
        }
        DAY_KEY => params.day = Some(DayToken::parse(value)),
        TIME_KEY => {
            let time = decode_time(value).map_err(|e| invalid(key, value, e.to_string()))?;
            params.time = Some(time);
        }
        PEOPLE_KEY => {
            let people = value
                .trim()
                .parse::<i64>()
                .map_err(|e| invalid(key, value, e.to_string()))?;
            params.people = Some(people.clamp(MIN_PEOPLE as i64, MAX_PEOPLE as i64) as u8);
        }
        WALK_KEY => params.walk_miles = Some(non_negative(key, value)?),
        PAY_KEY => params.cost_dollars = Some(non_negative(key, value)?),
        other => log::debug!("ignoring unknown fragment key '{other}'"),
    }
    Ok(())
}

fn non_negative(key: &str, value: &str) -> Result<f64, SelectionError> {
    let parsed = value
        .trim()
        .parse::<f64>()
        .map_err(|e| invalid(key, value, e.to_string()))?;
    if parsed.is_finite() && parsed >= 0.0 {
        Ok(parsed)
    } else {
        Err(invalid(key, value, String::from("must be a non-negative number")))
    }
}

fn invalid(key: &str, value: &str, message: String) -> SelectionError {
    SelectionError::InvalidFragmentValue {
        key: key.to_string(),
        value: value.to_string(),
        message,
    }
}

impl FragmentParams {
    /// overlay the link values onto a selection, marking each one as changed.
    ///
    /// when the link carries modes but no pay value and the cost is still at
    /// its starting value, the cost follows the primary mode's default.
    pub fn apply(
        self,
        selection: &mut TripSelection,
        changed: &mut ChangedFields,
        defaults: &SelectionDefaults,
    ) {
        if let Some(modes) = self.modes {
            selection.modes = modes;
            let primary_cost = selection.primary_mode().and_then(|m| defaults.mode_cost(m));
            if let Some(cost) = primary_cost {
                if defaults.is_default_cost(selection.cost_dollars) {
                    selection.cost_dollars = cost;
                }
            }
        }
        if let Some(day) = self.day {
            selection.day = day;
            changed.day = true;
        }
        if let Some(time) = self.time {
            selection.time = Some(time);
            changed.time = true;
        }
        if let Some(people) = self.people {
            selection.set_people(people as i64);
            changed.people = true;
        }
        if let Some(walk) = self.walk_miles {
            selection.set_walk_miles(walk);
            changed.walk = true;
        }
        if let Some(cost) = self.cost_dollars {
            selection.set_cost_dollars(cost);
            changed.cost = true;
        }
    }
}

/// write the link fragment (without the leading '#') for a selection. modes
/// are written whenever any are selected, every other field only when the
/// user changed it. an empty string means there is nothing worth sharing.
pub fn encode_fragment(selection: &TripSelection, changed: &ChangedFields) -> String {
    let mut parts: Vec<String> = vec![];
    if !selection.modes.is_empty() {
        parts.push(format!("{MODES_KEY}={}", selection.modes.to_delimited()));
    }
    if changed.day && !selection.day.is_unset() {
        let day = selection.day.to_string();
        parts.push(format!("{DAY_KEY}={}", urlencoding::encode(&day)));
    }
    if changed.time {
        if let Some(time) = &selection.time {
            parts.push(format!("{TIME_KEY}={}", encode_time(time)));
        }
    }
    if changed.people {
        parts.push(format!("{PEOPLE_KEY}={}", selection.people));
    }
    if changed.walk {
        parts.push(format!("{WALK_KEY}={}", selection.walk_miles));
    }
    if changed.cost {
        parts.push(format!("{PAY_KEY}={}", selection.cost_dollars));
    }
    parts.join("&")
}
