use serde::{Deserialize, Serialize};

/// One accommodation record. Listings are never mutated after generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Listing {
	pub id: String,
	pub title: String,
	pub images: Vec<String>,
	pub cover: Cover,
	pub location: Location,
	pub rating: Rating,
	pub insights: Vec<Insight>,
	pub demand: Demand,
	pub room: Room,
	pub price: Price,
	#[serde(rename = "type")]
	pub kind: AccommodationType,
	pub description: String,
	pub facilities: Vec<Facility>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cover {
	pub url: String,
	pub tag: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
	pub address: String,
	/// Distance to the city centre in kilometres.
	pub centre: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rating {
	pub average: f64,
	pub reviews: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
	pub text: String,
	pub tag: Option<String>,
	pub highlights: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
	pub amount: u32,
	pub currency: String,
	pub breakfast: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Demand {
	Low,
	Medium,
	High,
}
impl Demand {
	pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Room {
	Double,
	Single,
	Family,
}
impl Room {
	pub const ALL: [Self; 3] = [Self::Double, Self::Single, Self::Family];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccommodationType {
	Hotel,
	Private,
	Hostel,
	House,
}
impl AccommodationType {
	pub const ALL: [Self; 4] = [Self::Hotel, Self::Private, Self::Hostel, Self::House];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Facility {
	NonSmoking,
	DisabledGuestsService,
	Parking,
	FreeWifi,
	PetsAllowed,
	Breakfast,
}
impl Facility {
	pub const ALL: [Self; 6] = [
		Self::NonSmoking,
		Self::DisabledGuestsService,
		Self::Parking,
		Self::FreeWifi,
		Self::PetsAllowed,
		Self::Breakfast,
	];
}
