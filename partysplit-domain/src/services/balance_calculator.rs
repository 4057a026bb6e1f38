use crate::model::{Participant, ParticipantBalance};

/// Derives each enabled participant's position against the equal share.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Equal share of the enabled participants, or `None` when nobody is enabled.
    pub fn equal_share(&self, participants: &[Participant]) -> Option<f64> {
        let (total, count) = participants
            .iter()
            .filter(|participant| participant.enabled)
            .fold((0.0_f64, 0_usize), |(total, count), participant| {
                (total + participant.spent, count + 1)
            });

        if count == 0 {
            return None;
        }
        Some(total / count as f64)
    }

    /// Balances of the enabled participants, in roster order.
    ///
    /// Disabled participants are left out entirely: they contribute neither to
    /// the total nor to the head count.
    pub fn calculate<'a>(&self, participants: &'a [Participant]) -> Vec<ParticipantBalance<'a>> {
        let Some(share) = self.equal_share(participants) else {
            return Vec::new();
        };

        participants
            .iter()
            .enumerate()
            .filter(|(_, participant)| participant.enabled)
            .map(|(position, participant)| ParticipantBalance {
                position,
                name: &participant.name,
                alias: &participant.alias,
                balance: participant.spent - share,
            })
            .collect()
    }
}

/// Shorthand for [`BalanceCalculator::calculate`].
pub fn derive_balances(participants: &[Participant]) -> Vec<ParticipantBalance<'_>> {
    BalanceCalculator.calculate(participants)
}
