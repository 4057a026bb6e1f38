use partysplit_application::{RepositoryError, RosterRepository, decode_roster, encode_roster};
use partysplit_domain::Roster;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// File name used when no roster path is configured.
pub const DEFAULT_ROSTER_FILE: &str = "party_people.json";

/// Keeps the roster as a JSON document on disk.
#[derive(Clone, Debug)]
pub struct JsonFileRosterRepository {
    path: PathBuf,
}

impl JsonFileRosterRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: io::Error) -> RepositoryError {
        RepositoryError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for JsonFileRosterRepository {
    fn default() -> Self {
        Self::new(DEFAULT_ROSTER_FILE)
    }
}

impl RosterRepository for JsonFileRosterRepository {
    fn load(&self) -> Result<Option<Roster>, RepositoryError> {
        let document = match fs::read_to_string(&self.path) {
            Ok(document) => document,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(RepositoryError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let roster = decode_roster(&document)?;
        tracing::debug!(
            path = %self.path.display(),
            participant_count = roster.len(),
            "Loaded roster file"
        );
        Ok(Some(roster))
    }

    /// Writes to a sibling temporary file first and renames it over the target,
    /// so a crash mid-write never leaves a truncated roster behind.
    fn save(&self, roster: &Roster) -> Result<(), RepositoryError> {
        let document = encode_roster(roster)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| self.write_error(err))?;
        }

        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        let staging = PathBuf::from(staging);

        fs::write(&staging, document).map_err(|err| self.write_error(err))?;
        fs::rename(&staging, &self.path).map_err(|err| self.write_error(err))?;

        tracing::debug!(
            path = %self.path.display(),
            participant_count = roster.len(),
            "Saved roster file"
        );
        Ok(())
    }
}
