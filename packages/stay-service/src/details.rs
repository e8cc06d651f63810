use serde::{Deserialize, Serialize};

use crate::{Detail, Error, Result, StayService, query};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetailsRequest {
	pub id: Option<String>,
}
impl DetailsRequest {
	pub fn from_pairs(pairs: &[(String, String)]) -> Self {
		Self { id: query::first_value(pairs, "id") }
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailsResponse {
	pub data: Detail,
}

impl StayService {
	pub fn details(&self, req: &DetailsRequest) -> Result<DetailsResponse> {
		let Some(id) = req.id.as_deref() else {
			return Err(Error::NotFound { message: "id is required.".to_string() });
		};
		let listing = self.catalog.find_by_id(id)?;

		tracing::debug!(id, "Details served.");

		Ok(DetailsResponse { data: Detail::from(listing) })
	}
}
