pub mod routes;
pub mod state;

use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use stay_config::Config;

use crate::state::AppState;

#[derive(Debug, Parser)]
#[command(
	version = stay_cli::VERSION,
	rename_all = "kebab",
	styles = stay_cli::styles(),
)]
pub struct Args {
	/// TOML configuration file. Built-in defaults apply when omitted.
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: Option<PathBuf>,
	/// Overrides the port of `service.http_bind`.
	#[arg(long, short = 'p', env = "PORT")]
	pub port: Option<u16>,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = match args.config.as_deref() {
		Some(path) => stay_config::load(path)?,
		None => Config::default(),
	};

	init_tracing(&config)?;

	let http_addr = http_addr(&config, args.port)?;
	let state = AppState::new(&config);
	let app = routes::router(state);
	let http_listener = TcpListener::bind(http_addr).await?;

	tracing::info!(%http_addr, "HTTP server listening.");

	axum::serve(http_listener, app).await?;

	Ok(())
}

pub fn http_addr(config: &Config, port: Option<u16>) -> color_eyre::Result<SocketAddr> {
	let mut addr: SocketAddr = config.service.http_bind.parse()?;

	if let Some(port) = port {
		addr.set_port(port);
	}

	Ok(addr)
}

fn init_tracing(config: &Config) -> color_eyre::Result<()> {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).init();

	Ok(())
}
