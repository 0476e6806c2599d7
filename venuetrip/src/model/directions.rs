use serde::{Deserialize, Serialize};
use venuetrip_core::model::{ModeTag, TripSelection};

use super::DestinationContext;

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";
const MAPS_DIRECTIONS_URL: &str = "https://www.google.com/maps/dir/?api=1&destination=";

/// a map link for the first leg of the trip, chosen by the primary mode.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DirectionsLink {
    pub url: String,
    pub link_text: String,
}

impl DirectionsLink {
    /// with no mode selected the link assumes the user is driving.
    pub fn for_selection(selection: &TripSelection, context: &DestinationContext) -> DirectionsLink {
        let destination = context.encoded(&selection.destination);
        let search = |what: &str, text: &str| DirectionsLink {
            url: format!("{MAPS_SEARCH_URL}{what}+near+{destination}"),
            link_text: text.to_string(),
        };
        match selection.primary_mode().unwrap_or(ModeTag::Drive) {
            ModeTag::Drive => search("parking", "Find parking near destination"),
            ModeTag::Transit => search("transit+stop", "Find transit stop near destination"),
            ModeTag::Shuttle => search("DASH+shuttle+stop", "Find DASH stop near destination"),
            ModeTag::Bike => search("bike+rack", "Find bike rack near destination"),
            ModeTag::Rideshare | ModeTag::Micromobility => DirectionsLink {
                url: format!("{MAPS_DIRECTIONS_URL}{destination}"),
                link_text: String::from("Get directions to destination"),
            },
        }
    }
}
