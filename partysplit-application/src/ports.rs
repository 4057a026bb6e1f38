use crate::error::RepositoryError;
use partysplit_domain::Roster;

/// Durable copy of the roster.
pub trait RosterRepository: Send + Sync {
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<Roster>, RepositoryError>;

    fn save(&self, roster: &Roster) -> Result<(), RepositoryError>;
}

impl<R: RosterRepository + ?Sized> RosterRepository for &R {
    fn load(&self) -> Result<Option<Roster>, RepositoryError> {
        (**self).load()
    }

    fn save(&self, roster: &Roster) -> Result<(), RepositoryError> {
        (**self).save(roster)
    }
}
