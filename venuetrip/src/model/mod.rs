mod destination;
mod directions;
pub mod recommendation;

pub use destination::DestinationContext;
pub use directions::DirectionsLink;
