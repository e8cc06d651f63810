mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
	Catalog, Config, DEFAULT_CATALOG_SIZE, DEFAULT_HTTP_BIND, DEFAULT_LOG_LEVEL, Service,
};

use std::{fs, net::SocketAddr, path::Path};

pub const MAX_CATALOG_SIZE: usize = 1_000_000;

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.parse::<SocketAddr>().is_err() {
		return Err(Error::Validation {
			message: "service.http_bind must be a socket address such as 0.0.0.0:5000."
				.to_string(),
		});
	}
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.catalog.size == 0 {
		return Err(Error::Validation {
			message: "catalog.size must be greater than zero.".to_string(),
		});
	}
	if cfg.catalog.size > MAX_CATALOG_SIZE {
		return Err(Error::Validation {
			message: format!("catalog.size must be {MAX_CATALOG_SIZE} or less."),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg.service.log_level.trim().is_empty() {
		cfg.service.log_level = DEFAULT_LOG_LEVEL.to_string();
	}

	cfg.service.http_bind = cfg.service.http_bind.trim().to_string();
}
