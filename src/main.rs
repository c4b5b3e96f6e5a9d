mod cli;

use clap::Parser;
use color_eyre::Result;
use ensure_default_collection::blocking::SecretService;
use ensure_default_collection::{ensure_collection, EnsureOutcome};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = cli::Cli::parse();
    init_tracing(cli.log_level());

    let options = cli.options();
    let ss = SecretService::connect()?;

    match ensure_collection(&ss, &options)? {
        EnsureOutcome::Created { label } => println!("Created collection {label}"),
        EnsureOutcome::Existing { label } => info!(
            alias = options.alias.as_str(),
            label = label.as_deref().unwrap_or("<unknown>"),
            "collection exists"
        ),
        EnsureOutcome::Missing => println!("No collection for alias {}", options.alias),
    }

    Ok(())
}

fn init_tracing(default_level: &str) {
    // stdout is reserved for the confirmation message
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
