#![warn(clippy::uninlined_format_args)]

pub mod error_presenter;
pub mod roster_presenter;
pub mod settlement_presenter;
pub mod text_table;

pub use error_presenter::format_roster_error;
pub use roster_presenter::RosterPresenter;
pub use settlement_presenter::SettlementPresenter;
pub use text_table::{Alignment, TextTableBuilder};
