use crate::{
    model::{Participant, Transfer},
    services::{BalanceCalculator, SettlementOptions, TransferMatcher},
};

/// Computes the payments that bring every enabled participant to the equal share.
///
/// The engine holds no state besides its options and never mutates its input,
/// so one instance can serve any number of runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct SettlementEngine {
    options: SettlementOptions,
}

impl SettlementEngine {
    pub fn new(options: SettlementOptions) -> Self {
        Self { options }
    }

    pub fn compute<'a>(&self, participants: &'a [Participant]) -> Vec<Transfer<'a>> {
        let balances = BalanceCalculator.calculate(participants);
        if balances.is_empty() {
            tracing::debug!(
                participant_count = participants.len(),
                "No enabled participants; nothing to settle"
            );
            return Vec::new();
        }

        let transfers =
            TransferMatcher::new(self.options.tolerance).match_transfers(&balances);

        tracing::debug!(
            participant_count = participants.len(),
            enabled_count = balances.len(),
            creditor_count = balances.iter().filter(|b| b.balance > 0.0).count(),
            debtor_count = balances.iter().filter(|b| b.balance < 0.0).count(),
            transfer_count = transfers.len(),
            tolerance = %self.options.tolerance,
            "Settlement computed"
        );

        transfers
    }
}

/// Settles `participants` with the default options.
pub fn compute_settlement(participants: &[Participant]) -> Vec<Transfer<'_>> {
    SettlementEngine::default().compute(participants)
}

/// Settles `participants` with explicit options.
pub fn compute_settlement_with(
    participants: &[Participant],
    options: SettlementOptions,
) -> Vec<Transfer<'_>> {
    SettlementEngine::new(options).compute(participants)
}
