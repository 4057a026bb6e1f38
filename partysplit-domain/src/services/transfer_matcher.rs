use crate::{
    model::{Amount, ParticipantBalance, Transfer},
    services::Tolerance,
};

/// Greedy creditor/debtor matching.
pub struct TransferMatcher {
    tolerance: Tolerance,
}

impl TransferMatcher {
    pub fn new(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }

    /// Pairs the largest remaining debt with the largest remaining credit until
    /// one side runs out.
    ///
    /// Balances of exactly zero are ignored. Near-zero residuals are not
    /// filtered up front; they are closed by the tolerance check while matching.
    /// Equal balances keep their input order. The input is not modified.
    pub fn match_transfers<'a>(&self, balances: &[ParticipantBalance<'a>]) -> Vec<Transfer<'a>> {
        let mut creditors: Vec<ParticipantBalance<'a>> = balances
            .iter()
            .filter(|entry| entry.balance > 0.0)
            .copied()
            .collect();
        let mut debtors: Vec<ParticipantBalance<'a>> = balances
            .iter()
            .filter(|entry| entry.balance < 0.0)
            .copied()
            .collect();

        // `sort_by` is stable, which is what keeps ties in roster order.
        creditors.sort_by(|lhs, rhs| rhs.balance.total_cmp(&lhs.balance));
        debtors.sort_by(|lhs, rhs| lhs.balance.total_cmp(&rhs.balance));

        let mut transfers =
            Vec::with_capacity((creditors.len() + debtors.len()).saturating_sub(1));
        let mut debtor_idx = 0;
        let mut creditor_idx = 0;

        while debtor_idx < debtors.len() && creditor_idx < creditors.len() {
            let debtor = &mut debtors[debtor_idx];
            let creditor = &mut creditors[creditor_idx];
            // One side lands on exactly zero, so every step advances a cursor.
            let amount = (-debtor.balance).min(creditor.balance);

            transfers.push(Transfer {
                from: debtor.name,
                to: creditor.name,
                alias: creditor.alias,
                amount: Amount::new(amount),
            });

            debtor.balance += amount;
            creditor.balance -= amount;

            if self.tolerance.is_settled(debtor.balance) {
                debtor_idx += 1;
            }
            if self.tolerance.is_settled(creditor.balance) {
                creditor_idx += 1;
            }
        }

        transfers
    }
}

impl Default for TransferMatcher {
    fn default() -> Self {
        Self::new(Tolerance::DEFAULT)
    }
}

/// Shorthand for [`TransferMatcher::match_transfers`].
pub fn match_transfers<'a>(
    balances: &[ParticipantBalance<'a>],
    tolerance: Tolerance,
) -> Vec<Transfer<'a>> {
    TransferMatcher::new(tolerance).match_transfers(balances)
}
