use clap::{Parser, Subcommand};
use partysplit_domain::Tolerance;
use partysplit_infrastructure::DEFAULT_ROSTER_FILE;
use std::{num::NonZeroUsize, path::PathBuf};

/// Split shared party expenses into the fewest peer-to-peer payments.
#[derive(Debug, Parser)]
#[command(name = "partysplit", version)]
pub struct Cli {
    /// Roster file kept between runs
    #[arg(
        long,
        env = "PARTYSPLIT_ROSTER",
        default_value = DEFAULT_ROSTER_FILE,
        global = true
    )]
    pub roster: PathBuf,

    /// Remaining balance below which a participant counts as settled
    #[arg(
        long,
        env = "PARTYSPLIT_TOLERANCE",
        default_value_t = Tolerance::DEFAULT,
        global = true
    )]
    pub tolerance: Tolerance,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the roster
    List,
    /// Append a participant
    Add {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        spent: f64,
        #[arg(long, default_value = "")]
        alias: String,
        /// Leave the participant out of settlements
        #[arg(long)]
        disabled: bool,
    },
    /// Change fields of the participant at POSITION (1-based)
    Set {
        position: NonZeroUsize,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        spent: Option<f64>,
        #[arg(long)]
        alias: Option<String>,
    },
    /// Include or exclude the participant at POSITION (1-based)
    Toggle { position: NonZeroUsize },
    /// Delete the participant at POSITION (1-based)
    Remove { position: NonZeroUsize },
    /// Reset everybody's spending to zero
    ClearSpent,
    /// Compute the transfers that even out spending
    Calculate {
        /// Print transfers as JSON records
        #[arg(long)]
        json: bool,
        /// Print transfers as a table
        #[arg(long, conflicts_with = "json")]
        table: bool,
    },
    /// Write the roster to a JSON file
    Export { path: PathBuf },
    /// Replace the roster with the contents of a JSON file
    Import { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::rstest;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_set_with_optional_fields() {
        let cli = Cli::try_parse_from([
            "partysplit",
            "--roster",
            "party.json",
            "set",
            "2",
            "--spent",
            "-4.5",
            "--alias",
            "beto.mp",
        ])
        .expect("valid arguments");

        assert_eq!(cli.roster, PathBuf::from("party.json"));
        match cli.command {
            Command::Set {
                position,
                name,
                spent,
                alias,
            } => {
                assert_eq!(position.get(), 2);
                assert_eq!(name, None);
                assert_eq!(spent, Some(-4.5));
                assert_eq!(alias.as_deref(), Some("beto.mp"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[rstest]
    #[case::zero_position(&["partysplit", "toggle", "0"])]
    #[case::zero_tolerance(&["partysplit", "--tolerance", "0", "list"])]
    #[case::json_and_table(&["partysplit", "calculate", "--json", "--table"])]
    fn rejects_invalid_arguments(#[case] args: &[&str]) {
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn global_options_follow_the_subcommand() {
        let cli = Cli::try_parse_from(["partysplit", "calculate", "--tolerance", "0.5"])
            .expect("valid arguments");
        assert_eq!(cli.tolerance.value(), 0.5);
    }
}
