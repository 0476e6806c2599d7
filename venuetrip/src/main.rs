use clap::Parser;
use venuetrip::{app::VenueTripApp, model::recommendation::RecommendationError};

fn main() -> Result<(), RecommendationError> {
    env_logger::init();
    let args = VenueTripApp::parse();
    args.op.run()
}
