#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    Amount, DISPLAY_SCALE, Participant, ParticipantBalance, Roster, RosterEditError, Transfer,
};
pub use services::{
    BalanceCalculator, InvalidTolerance, SettlementEngine, SettlementOptions, Tolerance,
    TransferMatcher, compute_settlement, compute_settlement_with, derive_balances,
    match_transfers,
};
