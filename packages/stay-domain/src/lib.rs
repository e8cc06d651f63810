pub mod generator;
pub mod listing;
pub mod text;

pub use generator::{generate_catalog, generate_listing};
pub use listing::{
	AccommodationType, Cover, Demand, Facility, Insight, Listing, Location, Price, Rating, Room,
};
