use serde::{Deserialize, Serialize};

use crate::{StayService, Suggestion, query};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuggestionsRequest {
	pub search: Option<String>,
}
impl SuggestionsRequest {
	pub fn from_pairs(pairs: &[(String, String)]) -> Self {
		Self { search: query::first_value(pairs, "search") }
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsResponse {
	pub suggestions: Vec<Suggestion>,
}

impl StayService {
	/// Title lookup for autocomplete. Case-sensitive and independent of the list filters.
	pub fn suggestions(&self, req: &SuggestionsRequest) -> SuggestionsResponse {
		let search = req.search.as_deref().unwrap_or_default();
		let suggestions = self
			.catalog
			.find_by_title(search)
			.into_iter()
			.map(Suggestion::from)
			.collect::<Vec<_>>();

		tracing::debug!(search, count = suggestions.len(), "Suggestions served.");

		SuggestionsResponse { suggestions }
	}
}
