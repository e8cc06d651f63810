//! Response shapes. Numeric fields are rendered as display strings.

use serde::{Deserialize, Serialize};

use stay_domain::{
	AccommodationType, Cover, Demand, Facility, Insight, Listing, Price, Rating, Room,
};

pub const DISTANCE_UNIT: &str = "km";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
	pub id: String,
	pub title: String,
	pub cover: Cover,
	pub location: ListLocation,
	pub rating: DisplayRating,
	pub insights: Vec<Insight>,
	pub demand: Demand,
	pub room: Room,
	pub price: DisplayPrice,
}
impl From<&Listing> for ListItem {
	fn from(listing: &Listing) -> Self {
		Self {
			id: listing.id.clone(),
			title: listing.title.clone(),
			cover: listing.cover.clone(),
			location: ListLocation {
				address: listing.location.address.clone(),
				centre: format!("{} {DISTANCE_UNIT}", listing.location.centre),
			},
			rating: DisplayRating::from(&listing.rating),
			insights: listing.insights.clone(),
			demand: listing.demand,
			room: listing.room,
			price: DisplayPrice::from(&listing.price),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListLocation {
	pub address: String,
	/// Distance with its unit, e.g. `"2.5 km"`.
	pub centre: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRating {
	pub average: String,
	pub reviews: String,
}
impl From<&Rating> for DisplayRating {
	fn from(rating: &Rating) -> Self {
		Self { average: rating.average.to_string(), reviews: rating.reviews.to_string() }
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPrice {
	pub amount: String,
	pub currency: String,
	pub breakfast: bool,
}
impl From<&Price> for DisplayPrice {
	fn from(price: &Price) -> Self {
		Self {
			amount: price.amount.to_string(),
			currency: price.currency.clone(),
			breakfast: price.breakfast,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
	pub label: String,
}
impl From<&Listing> for Suggestion {
	fn from(listing: &Listing) -> Self {
		Self { label: listing.title.clone() }
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detail {
	pub id: String,
	pub title: String,
	pub images: Vec<String>,
	pub address: String,
	pub rating: DisplayRating,
	pub price: DisplayPrice,
	#[serde(rename = "type")]
	pub kind: AccommodationType,
	pub description: String,
	pub facilities: Vec<Facility>,
}
impl From<&Listing> for Detail {
	fn from(listing: &Listing) -> Self {
		Self {
			id: listing.id.clone(),
			title: listing.title.clone(),
			images: listing.images.clone(),
			address: listing.location.address.clone(),
			rating: DisplayRating::from(&listing.rating),
			price: DisplayPrice::from(&listing.price),
			kind: listing.kind,
			description: listing.description.clone(),
			facilities: listing.facilities.clone(),
		}
	}
}
