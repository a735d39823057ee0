extern crate tic_tac_toe;

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tic_tac_toe::settings::Settings;
use tic_tac_toe::{cli, Controller};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let settings = Settings::parse();
    tracing::info!(?settings, "starting");
    let mut controller = Controller::new(settings.difficulty(), settings.rng(), settings.history());

    cli::run(&mut controller, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
