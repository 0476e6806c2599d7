use indexmap::IndexSet;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::ModeTag;

/// the selected travel modes in insertion order. the first inserted mode is the
/// primary mode. toggling a selected mode removes it without disturbing the
/// order of the rest.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(transparent)]
pub struct ModeSet(IndexSet<ModeTag>);

impl ModeSet {
    pub fn new() -> ModeSet {
        ModeSet(IndexSet::new())
    }

    /// parse a comma-delimited list of mode tags. unknown tags are dropped,
    /// repeated tags keep their first position.
    pub fn from_delimited(list: &str) -> ModeSet {
        let mut modes = ModeSet::new();
        for tag in list.split(',').filter(|tag| !tag.trim().is_empty()) {
            match tag.parse::<ModeTag>() {
                Ok(mode) => {
                    if !modes.insert(mode) {
                        log::debug!("ignoring repeated mode '{mode}' in list '{list}'");
                    }
                }
                Err(e) => log::debug!("ignoring mode in list '{list}': {e}"),
            }
        }
        modes
    }

    pub fn to_delimited(&self) -> String {
        self.0.iter().map(ModeTag::as_str).join(",")
    }

    /// add the mode if absent, remove it if present. returns true if the mode
    /// is selected after the toggle.
    pub fn toggle(&mut self, mode: ModeTag) -> bool {
        if self.0.shift_remove(&mode) {
            false
        } else {
            self.0.insert(mode);
            true
        }
    }

    /// returns false if the mode was already selected.
    pub fn insert(&mut self, mode: ModeTag) -> bool {
        self.0.insert(mode)
    }

    pub fn clear(&mut self) {
        self.0.clear()
    }

    pub fn contains(&self, mode: ModeTag) -> bool {
        self.0.contains(&mode)
    }

    pub fn contains_all(&self, modes: &[ModeTag]) -> bool {
        modes.iter().all(|m| self.0.contains(m))
    }

    /// the first-selected mode, used for labels and direction links.
    pub fn primary(&self) -> Option<ModeTag> {
        self.0.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModeTag> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ModeTag> for ModeSet {
    fn from_iter<T: IntoIterator<Item = ModeTag>>(iter: T) -> Self {
        ModeSet(iter.into_iter().collect())
    }
}

// IndexSet equality ignores order, but selection order is meaningful here
impl PartialEq for ModeSet {
    fn eq(&self, other: &Self) -> bool {
        self.0.iter().eq(other.0.iter())
    }
}

impl Eq for ModeSet {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_preserves_order() {
        let mut modes = ModeSet::new();
        assert!(modes.toggle(ModeTag::Drive));
        assert!(modes.toggle(ModeTag::Transit));
        assert!(modes.toggle(ModeTag::Bike));
        assert!(!modes.toggle(ModeTag::Transit));
        assert_eq!(modes.to_delimited(), "drive,bike");
        assert!(modes.toggle(ModeTag::Transit));
        assert_eq!(modes.to_delimited(), "drive,bike,transit");
    }

    #[test]
    fn test_primary_is_first_selected() {
        let mut modes = ModeSet::from_iter([ModeTag::Rideshare, ModeTag::Drive]);
        assert_eq!(modes.primary(), Some(ModeTag::Rideshare));
        modes.toggle(ModeTag::Rideshare);
        assert_eq!(modes.primary(), Some(ModeTag::Drive));
        modes.clear();
        assert_eq!(modes.primary(), None);
    }

    #[test]
    fn test_from_delimited_filters_unknown_tags() {
        let modes = ModeSet::from_delimited("drive,invalid,transit");
        assert_eq!(modes.to_delimited(), "drive,transit");
        assert!(ModeSet::from_delimited("").is_empty());
        let all = ModeSet::from_delimited("drive,rideshare,transit,micromobility,shuttle,bike");
        assert_eq!(all.len(), 6);
    }

    #[test]
    fn test_from_delimited_ignores_repeats() {
        let modes = ModeSet::from_delimited("bike,shuttle,bike");
        assert_eq!(modes.to_delimited(), "bike,shuttle");
    }

    #[test]
    fn test_insert_keeps_first_position() {
        let mut modes = ModeSet::new();
        assert!(modes.insert(ModeTag::Transit));
        assert!(modes.insert(ModeTag::Drive));
        assert!(!modes.insert(ModeTag::Transit));
        assert_eq!(modes.to_delimited(), "transit,drive");
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let a = ModeSet::from_iter([ModeTag::Drive, ModeTag::Transit]);
        let b = ModeSet::from_iter([ModeTag::Transit, ModeTag::Drive]);
        assert_ne!(a, b);
        assert!(a.contains_all(&[ModeTag::Transit, ModeTag::Drive]));
    }

    #[test]
    fn test_serializes_as_ordered_list() {
        let modes = ModeSet::from_iter([ModeTag::Shuttle, ModeTag::Drive]);
        let json = serde_json::to_string(&modes).unwrap();
        assert_eq!(json, r#"["shuttle","drive"]"#);
        let back: ModeSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, modes);
    }
}
