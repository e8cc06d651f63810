use rand::Rng;

use stay_domain::{Listing, generator};

use crate::{Error, FilterSpec, Result};

/// Read-only store over the listings generated at startup.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
	listings: Vec<Listing>,
}
impl Catalog {
	pub fn new(listings: Vec<Listing>) -> Self {
		Self { listings }
	}

	pub fn generate<R: Rng>(rng: &mut R, size: usize) -> Self {
		let listings = generator::generate_catalog(rng, size);

		tracing::info!(size = listings.len(), "Catalog generated.");

		Self::new(listings)
	}

	pub fn len(&self) -> usize {
		self.listings.len()
	}

	pub fn is_empty(&self) -> bool {
		self.listings.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Listing> {
		self.listings.iter()
	}

	/// Listings matching every predicate of `filter`, in catalog order.
	pub fn find_all(&self, filter: &FilterSpec) -> Vec<&Listing> {
		let listings =
			self.listings.iter().filter(|listing| filter.matches(listing)).collect::<Vec<_>>();

		tracing::debug!(?filter, matched = listings.len(), "Catalog filtered.");

		listings
	}

	pub fn find_by_id(&self, id: &str) -> Result<&Listing> {
		self.listings
			.iter()
			.find(|listing| listing.id == id)
			.ok_or_else(|| Error::NotFound(format!("Listing {id:?} does not exist.")))
	}

	/// Case-sensitive, unlike the title predicate of [`Catalog::find_all`].
	pub fn find_by_title(&self, text: &str) -> Vec<&Listing> {
		self.listings.iter().filter(|listing| listing.title.contains(text)).collect()
	}
}
