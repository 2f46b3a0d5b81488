use anyhow::Result;
use clap::Parser;
use ecommerce_cart::{cli::{Args, CliApp}, utils::Config};

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::from_env()
        .and_then(|config| config.with_catalog_path(args.catalog.clone()))
        .map_err(|e| {
            eprintln!("Failed to load configuration: {}", e);
            e
        })?;

    let filter = if args.verbose {
        "debug".to_string()
    } else {
        config.log_level.clone()
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("🛒 Cart CLI starting...");
    tracing::debug!(
        "Configuration loaded for {} environment",
        config.environment
    );

    let mut app = CliApp::new(config)?;
    app.run(args.command)?;

    tracing::debug!("🛒 Cart CLI stopped");
    Ok(())
}
