use serde::{Deserialize, Serialize};

/// where the venue is. the region is appended to the destination name when
/// it is sent to a map search.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DestinationContext {
    pub region: String,
}

impl Default for DestinationContext {
    fn default() -> Self {
        Self {
            region: String::from("Grand Rapids, MI"),
        }
    }
}

impl DestinationContext {
    /// percent-encoded "destination, region" for use in a map link.
    pub fn encoded(&self, destination: &str) -> String {
        let query = if self.region.trim().is_empty() {
            destination.to_string()
        } else {
            format!("{destination}, {}", self.region)
        };
        urlencoding::encode(&query).into_owned()
    }
}
