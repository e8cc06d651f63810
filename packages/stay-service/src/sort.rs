use stay_domain::Listing;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
	MaxAvgRating,
	MaxReviews,
	MinPrice,
	MaxPrice,
	/// Catalog order.
	#[default]
	Unsorted,
}
impl SortKey {
	/// Maps a `sorting` token. Matching is exact; anything else leaves the order untouched.
	pub fn from_token(token: &str) -> Self {
		match token {
			"MAX_AVG_RATING" => Self::MaxAvgRating,
			"MAX_REVIEWS" => Self::MaxReviews,
			"MIN_PRICE" => Self::MinPrice,
			"MAX_PRICE" => Self::MaxPrice,
			_ => Self::Unsorted,
		}
	}

	/// Stable: listings with equal keys keep their relative order.
	pub fn sort(self, listings: &mut [&Listing]) {
		match self {
			Self::MaxAvgRating =>
				listings.sort_by(|a, b| b.rating.average.total_cmp(&a.rating.average)),
			Self::MaxReviews => listings.sort_by(|a, b| b.rating.reviews.cmp(&a.rating.reviews)),
			Self::MinPrice => listings.sort_by(|a, b| a.price.amount.cmp(&b.price.amount)),
			Self::MaxPrice => listings.sort_by(|a, b| b.price.amount.cmp(&a.price.amount)),
			Self::Unsorted => {},
		}
	}
}
