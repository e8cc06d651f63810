pub mod details;
pub mod list;
pub mod projection;
pub mod query;
pub mod sort;
pub mod suggestions;

mod error;

pub use details::{DetailsRequest, DetailsResponse};
pub use error::{Error, Result};
pub use list::ListResponse;
pub use projection::{Detail, DisplayPrice, DisplayRating, ListItem, ListLocation, Suggestion};
pub use query::ListQuery;
pub use sort::SortKey;
pub use suggestions::{SuggestionsRequest, SuggestionsResponse};

use std::sync::Arc;

use stay_storage::Catalog;

/// Read-only query facade over the catalog. Cheap to clone and safe to share across requests.
#[derive(Clone, Debug)]
pub struct StayService {
	pub catalog: Arc<Catalog>,
}
impl StayService {
	pub fn new(catalog: Arc<Catalog>) -> Self {
		Self { catalog }
	}
}
