#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod ports;
pub mod roster_document;
pub mod roster_store;

pub use error::{RepositoryError, RosterDocumentError, RosterStoreError};
pub use ports::RosterRepository;
pub use roster_document::{decode_roster, encode_roster};
pub use roster_store::RosterStore;
