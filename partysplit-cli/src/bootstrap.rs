use crate::cli::Cli;
use partysplit_domain::SettlementOptions;
use partysplit_infrastructure::JsonFileRosterRepository;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Resolved settings for one invocation.
pub struct AppConfig {
    pub roster_path: PathBuf,
    pub settlement: SettlementOptions,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            roster_path: cli.roster.clone(),
            settlement: SettlementOptions::with_tolerance(cli.tolerance),
        }
    }

    pub fn repository(&self) -> JsonFileRosterRepository {
        JsonFileRosterRepository::new(&self.roster_path)
    }
}

/// Loads `.env` so its variables can back the CLI options.
pub fn load_env() {
    let _ = dotenvy::dotenv();
}

/// Initialize logging and tracing. Logs go to stderr so stdout stays clean for output.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
