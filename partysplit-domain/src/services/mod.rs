pub mod balance_calculator;
pub mod settlement_engine;
pub mod settlement_options;
pub mod transfer_matcher;

pub use balance_calculator::{BalanceCalculator, derive_balances};
pub use settlement_engine::{SettlementEngine, compute_settlement, compute_settlement_with};
pub use settlement_options::{InvalidTolerance, SettlementOptions, Tolerance};
pub use transfer_matcher::{TransferMatcher, match_transfers};
