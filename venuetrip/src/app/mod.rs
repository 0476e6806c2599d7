mod app_config;
mod recommend;
mod venuetrip_app;

pub use app_config::VenueTripConfig;
pub use recommend::{recommend, RecommendationReport, SelectionOverrides};
pub use venuetrip_app::{VenueTripApp, VenueTripOperation};
