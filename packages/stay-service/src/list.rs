use serde::{Deserialize, Serialize};

use crate::{ListItem, ListQuery, StayService};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
	pub list: Vec<ListItem>,
}

impl StayService {
	pub fn list(&self, query: &ListQuery) -> ListResponse {
		let filter = query.to_filter();
		let sort_key = query.sort_key();
		let mut listings = self.catalog.find_all(&filter);

		sort_key.sort(&mut listings);

		tracing::debug!(?query, ?sort_key, count = listings.len(), "List query served.");

		ListResponse { list: listings.into_iter().map(ListItem::from).collect() }
	}
}
