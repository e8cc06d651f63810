use serde::Deserialize;

pub const DEFAULT_HTTP_BIND: &str = "0.0.0.0:5000";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_CATALOG_SIZE: usize = 100;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
	#[serde(default)]
	pub service: Service,
	#[serde(default)]
	pub catalog: Catalog,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	#[serde(default = "default_http_bind")]
	pub http_bind: String,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}
impl Default for Service {
	fn default() -> Self {
		Self { http_bind: default_http_bind(), log_level: default_log_level() }
	}
}

#[derive(Debug, Deserialize)]
pub struct Catalog {
	/// Number of listings generated at startup.
	#[serde(default = "default_catalog_size")]
	pub size: usize,
	/// Fixed RNG seed. When absent the catalog is seeded from OS entropy.
	#[serde(default)]
	pub seed: Option<u64>,
}
impl Default for Catalog {
	fn default() -> Self {
		Self { size: default_catalog_size(), seed: None }
	}
}

fn default_http_bind() -> String {
	DEFAULT_HTTP_BIND.to_string()
}

fn default_log_level() -> String {
	DEFAULT_LOG_LEVEL.to_string()
}

fn default_catalog_size() -> usize {
	DEFAULT_CATALOG_SIZE
}
