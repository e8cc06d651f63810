use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = stay_api::Args::parse();

	stay_api::run(args).await
}
