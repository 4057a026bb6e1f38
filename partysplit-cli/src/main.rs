mod app;
mod bootstrap;
mod cli;

use bootstrap::AppConfig;
use clap::Parser;
use cli::Cli;
use partysplit_application::RosterStoreError;
use partysplit_presentation::format_roster_error;
use std::{io, process::ExitCode};

fn main() -> ExitCode {
    bootstrap::load_env();
    bootstrap::init_logging();

    let cli = Cli::parse();
    let config = AppConfig::from_cli(&cli);
    tracing::debug!(roster = %config.roster_path.display(), tolerance = %cli.tolerance, "Starting");

    let mut stdout = io::stdout().lock();
    match app::run(&config, config.repository(), cli.command, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<RosterStoreError>() {
                Some(store_err) => eprintln!("{}", format_roster_error(store_err)),
                None => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
