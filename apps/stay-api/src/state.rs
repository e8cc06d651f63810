use std::sync::Arc;

use rand::{SeedableRng, rngs::StdRng};

use stay_config::Config;
use stay_service::StayService;
use stay_storage::Catalog;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<StayService>,
}
impl AppState {
	/// Generates the process-wide catalog. Called once at startup.
	pub fn new(config: &Config) -> Self {
		let mut rng = match config.catalog.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_entropy(),
		};

		Self::from_catalog(Catalog::generate(&mut rng, config.catalog.size))
	}

	pub fn from_catalog(catalog: Catalog) -> Self {
		Self { service: Arc::new(StayService::new(Arc::new(catalog))) }
	}
}
