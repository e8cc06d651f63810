//! Raw query parameters to [`FilterSpec`] translation.
//!
//! Parsing is permissive: a malformed number silently falls back to its default.

use serde::{Deserialize, Serialize};

use stay_storage::FilterSpec;

use crate::SortKey;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
	pub search: Option<String>,
	pub centre: Option<String>,
	pub min_price: Option<String>,
	pub min_avg_rating: Option<String>,
	pub min_reviews_count: Option<String>,
	pub sorting: Option<String>,
}
impl ListQuery {
	/// Builds the query from raw pairs. A repeated name keeps its first value.
	pub fn from_pairs(pairs: &[(String, String)]) -> Self {
		Self {
			search: first_value(pairs, "search"),
			centre: first_value(pairs, "centre"),
			min_price: first_value(pairs, "minPrice"),
			min_avg_rating: first_value(pairs, "minAvgRating"),
			min_reviews_count: first_value(pairs, "minReviewsCount"),
			sorting: first_value(pairs, "sorting"),
		}
	}

	pub fn to_filter(&self) -> FilterSpec {
		FilterSpec {
			title: self.search.clone().unwrap_or_default(),
			// An explicit 0 is a real bound that matches nothing. Only absent or unparseable
			// values fall back to unbounded; 0 is not treated as falsy.
			max_centre: parse_int(self.centre.as_deref()).unwrap_or(i64::MAX),
			min_price: parse_int(self.min_price.as_deref()).unwrap_or(0),
			min_avg_rating: parse_int(self.min_avg_rating.as_deref()).unwrap_or(0),
			min_reviews_count: parse_int(self.min_reviews_count.as_deref()).unwrap_or(0),
		}
	}

	pub fn sort_key(&self) -> SortKey {
		self.sorting.as_deref().map(SortKey::from_token).unwrap_or_default()
	}
}

/// First value of `name` among raw query pairs.
pub fn first_value(pairs: &[(String, String)], name: &str) -> Option<String> {
	pairs.iter().find(|(key, _)| key == name).map(|(_, value)| value.clone())
}

/// Leading-integer parse: optional whitespace and sign, then the longest run of ASCII digits.
/// `"5km"` gives 5 and `"2.5"` gives 2. No digits or an overflow gives `None`.
pub fn parse_int(raw: Option<&str>) -> Option<i64> {
	let trimmed = raw?.trim_start();
	let (negative, unsigned) = match trimmed.as_bytes().first() {
		Some(b'-') => (true, &trimmed[1..]),
		Some(b'+') => (false, &trimmed[1..]),
		_ => (false, trimmed),
	};
	let end = unsigned.find(|c: char| !c.is_ascii_digit()).unwrap_or(unsigned.len());

	if end == 0 {
		return None;
	}

	let value = unsigned[..end].parse::<i64>().ok()?;

	Some(if negative { -value } else { value })
}
