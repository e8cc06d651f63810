use stay_domain::Listing;

/// Inclusion thresholds for a list query. Every comparison is strict, so a listing whose value
/// equals a threshold is excluded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterSpec {
	/// Case-insensitive title substring. Empty matches every title.
	pub title: String,
	/// Exclusive upper bound on the distance to the centre, in kilometres.
	pub max_centre: i64,
	pub min_price: i64,
	pub min_avg_rating: i64,
	pub min_reviews_count: i64,
}
impl FilterSpec {
	pub fn matches(&self, listing: &Listing) -> bool {
		contains_ignore_case(&listing.title, &self.title)
			&& listing.location.centre < self.max_centre as f64
			&& i64::from(listing.price.amount) > self.min_price
			&& i64::from(listing.rating.reviews) > self.min_reviews_count
			&& listing.rating.average > self.min_avg_rating as f64
	}
}
impl Default for FilterSpec {
	fn default() -> Self {
		Self {
			title: String::new(),
			max_centre: i64::MAX,
			min_price: 0,
			min_avg_rating: 0,
			min_reviews_count: 0,
		}
	}
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
	needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
