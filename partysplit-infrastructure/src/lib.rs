#![warn(clippy::uninlined_format_args)]

pub mod json_roster_repository;

pub use json_roster_repository::{DEFAULT_ROSTER_FILE, JsonFileRosterRepository};
