use crate::{
    error::{RosterDocumentError, RosterStoreError},
    ports::RosterRepository,
    roster_document::{decode_roster, encode_roster},
};
use partysplit_domain::{Participant, Roster, SettlementEngine, Transfer};
use std::sync::Arc;

/// Holds the current roster snapshot and keeps the repository in step with it.
///
/// Edits build a new [`Roster`]; a snapshot handed out earlier keeps showing
/// the roster as it was. A change only becomes current once the repository has
/// stored it, so a failed save leaves both copies on the previous roster.
pub struct RosterStore<R> {
    repository: R,
    roster: Arc<Roster>,
}

impl<R: RosterRepository> RosterStore<R> {
    /// Restores the persisted roster, or starts from a fresh one.
    pub fn open(repository: R) -> Result<Self, RosterStoreError> {
        let stored = repository.load()?;
        Ok(Self::restore(repository, stored))
    }

    /// Like [`open`](Self::open), but a stored roster that cannot be read is
    /// set aside for a fresh one. The file keeps its content until the next
    /// change is saved over it.
    pub fn open_or_fresh(repository: R) -> Self {
        match repository.load() {
            Ok(stored) => Self::restore(repository, stored),
            Err(err) => {
                tracing::warn!(error = %err, "Stored roster is unreadable; starting fresh");
                Self::restore(repository, None)
            }
        }
    }

    fn restore(repository: R, stored: Option<Roster>) -> Self {
        let roster = match stored {
            Some(roster) => {
                tracing::debug!(participant_count = roster.len(), "Restored roster");
                roster
            }
            None => {
                tracing::debug!("No stored roster; starting fresh");
                Roster::fresh()
            }
        };

        Self {
            repository,
            roster: Arc::new(roster),
        }
    }

    pub fn snapshot(&self) -> Arc<Roster> {
        Arc::clone(&self.roster)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Appends a blank, enabled participant.
    pub fn add_participant(&mut self) -> Result<Arc<Roster>, RosterStoreError> {
        self.add(Participant::default())
    }

    pub fn add(&mut self, participant: Participant) -> Result<Arc<Roster>, RosterStoreError> {
        Participant::check_spent(participant.spent)?;
        let next = self.roster.with_added(participant);
        self.commit(next)
    }

    pub fn update_name(
        &mut self,
        index: usize,
        name: impl Into<String>,
    ) -> Result<Arc<Roster>, RosterStoreError> {
        let name = name.into();
        let next = self
            .roster
            .with_updated(index, |participant| participant.name = name)?;
        self.commit(next)
    }

    pub fn update_alias(
        &mut self,
        index: usize,
        alias: impl Into<String>,
    ) -> Result<Arc<Roster>, RosterStoreError> {
        let alias = alias.into();
        let next = self
            .roster
            .with_updated(index, |participant| participant.alias = alias)?;
        self.commit(next)
    }

    /// Fails without touching the roster when `spent` is NaN or infinite.
    pub fn update_spent(&mut self, index: usize, spent: f64) -> Result<Arc<Roster>, RosterStoreError> {
        let spent = Participant::check_spent(spent)?;
        let next = self
            .roster
            .with_updated(index, |participant| participant.spent = spent)?;
        self.commit(next)
    }

    pub fn toggle_enabled(&mut self, index: usize) -> Result<Arc<Roster>, RosterStoreError> {
        let next = self
            .roster
            .with_updated(index, |participant| participant.enabled = !participant.enabled)?;
        self.commit(next)
    }

    pub fn remove_participant(&mut self, index: usize) -> Result<Arc<Roster>, RosterStoreError> {
        let next = self.roster.without(index)?;
        self.commit(next)
    }

    /// Resets every participant's spending to zero, keeping everything else.
    pub fn clear_spent(&mut self) -> Result<Arc<Roster>, RosterStoreError> {
        let next = self.roster.with_spent_cleared();
        self.commit(next)
    }

    pub fn export_document(&self) -> Result<String, RosterDocumentError> {
        encode_roster(&self.roster)
    }

    /// Replaces the roster with the one in `document`.
    ///
    /// A document that is not a JSON array of participant records is rejected
    /// and the current roster stays as it was.
    pub fn import_document(&mut self, document: &str) -> Result<Arc<Roster>, RosterStoreError> {
        let imported = match decode_roster(document) {
            Ok(roster) => roster,
            Err(err) => {
                tracing::warn!(error = %err, "Rejected roster import");
                return Err(err.into());
            }
        };

        tracing::info!(participant_count = imported.len(), "Imported roster");
        self.commit(imported)
    }

    /// Runs the engine over the current snapshot.
    pub fn calculate<'s>(&'s self, engine: &SettlementEngine) -> Vec<Transfer<'s>> {
        engine.compute(self.roster.participants())
    }

    fn commit(&mut self, next: Roster) -> Result<Arc<Roster>, RosterStoreError> {
        if let Err(err) = self.repository.save(&next) {
            tracing::error!(error = %err, "Failed to persist roster; keeping previous snapshot");
            return Err(err.into());
        }

        tracing::debug!(participant_count = next.len(), "Persisted roster");
        self.roster = Arc::new(next);
        Ok(self.snapshot())
    }
}
