//! Fixtures shared by the workspace test suites.

use rand::{SeedableRng, rngs::StdRng};

use stay_domain::{
	AccommodationType, Cover, Demand, Facility, Insight, Listing, Location, Price, Rating, Room,
	generator,
};

pub const SCENARIO_GRAND_ID: &str = "a";
pub const SCENARIO_BUDGET_ID: &str = "b";

/// Builds hand-picked listings with predictable values.
pub struct ListingBuilder {
	listing: Listing,
}
impl ListingBuilder {
	pub fn new(id: &str, title: &str) -> Self {
		let image = format!("https://img.test/{id}/0.jpg");

		Self {
			listing: Listing {
				id: id.to_string(),
				title: title.to_string(),
				images: vec![
					image.clone(),
					format!("https://img.test/{id}/1.jpg"),
					format!("https://img.test/{id}/2.jpg"),
				],
				cover: Cover { url: image, tag: "cover".to_string() },
				location: Location {
					address: "ul. Testowa 1, 00-001, Polska".to_string(),
					centre: 1.0,
				},
				rating: Rating { average: 1.0, reviews: 1 },
				insights: vec![Insight {
					text: "Quiet street.".to_string(),
					tag: None,
					highlights: false,
				}],
				demand: Demand::Medium,
				room: Room::Double,
				price: Price { amount: 100, currency: "zł".to_string(), breakfast: false },
				kind: AccommodationType::Hotel,
				description: format!("{title} description."),
				facilities: vec![Facility::FreeWifi],
			},
		}
	}

	pub fn centre(mut self, centre: f64) -> Self {
		self.listing.location.centre = centre;

		self
	}

	pub fn price(mut self, amount: u32) -> Self {
		self.listing.price.amount = amount;

		self
	}

	pub fn currency(mut self, currency: &str) -> Self {
		self.listing.price.currency = currency.to_string();

		self
	}

	pub fn breakfast(mut self, breakfast: bool) -> Self {
		self.listing.price.breakfast = breakfast;

		self
	}

	pub fn rating(mut self, average: f64, reviews: u32) -> Self {
		self.listing.rating = Rating { average, reviews };

		self
	}

	pub fn address(mut self, address: &str) -> Self {
		self.listing.location.address = address.to_string();

		self
	}

	pub fn kind(mut self, kind: AccommodationType) -> Self {
		self.listing.kind = kind;

		self
	}

	pub fn facilities(mut self, facilities: &[Facility]) -> Self {
		self.listing.facilities = facilities.to_vec();

		self
	}

	pub fn insights(mut self, insights: Vec<Insight>) -> Self {
		self.listing.insights = insights;

		self
	}

	pub fn build(self) -> Listing {
		self.listing
	}
}

/// "Grand Hotel" (close, pricey, well rated) and "Budget Inn" (far, cheap, few reviews).
pub fn scenario_listings() -> Vec<Listing> {
	vec![
		ListingBuilder::new(SCENARIO_GRAND_ID, "Grand Hotel")
			.centre(2.0)
			.price(500)
			.rating(8.0, 50)
			.build(),
		ListingBuilder::new(SCENARIO_BUDGET_ID, "Budget Inn")
			.centre(8.0)
			.price(100)
			.rating(5.0, 5)
			.kind(AccommodationType::Hostel)
			.build(),
	]
}

pub fn seeded_listings(size: usize, seed: u64) -> Vec<Listing> {
	let mut rng = StdRng::seed_from_u64(seed);

	generator::generate_catalog(&mut rng, size)
}
