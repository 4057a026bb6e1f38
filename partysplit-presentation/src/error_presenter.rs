use partysplit_application::{RosterDocumentError, RosterStoreError};
use partysplit_domain::RosterEditError;
use partysplit_i18n as i18n;

/// User-facing message for a failed roster operation. Positions are 1-based.
pub fn format_roster_error(error: &RosterStoreError) -> String {
    match error {
        RosterStoreError::Edit(RosterEditError::IndexOutOfRange { index, len }) => {
            i18n::participant_not_found(index + 1, *len)
        }
        RosterStoreError::Edit(RosterEditError::NonFiniteSpent { spent }) => {
            i18n::spent_not_a_number(spent)
        }
        RosterStoreError::Document(err) => format_document_error(err),
        RosterStoreError::Repository(err) => format!("{} ({err})", i18n::STORAGE_FAILED),
    }
}

pub fn format_document_error(error: &RosterDocumentError) -> String {
    match error {
        RosterDocumentError::Malformed(source) => {
            format!("{} ({source})", i18n::IMPORT_FAILED)
        }
        RosterDocumentError::NotAnArray { found } => {
            format!("{} {}", i18n::IMPORT_FAILED, i18n::import_not_an_array(found))
        }
        RosterDocumentError::InvalidRecord { index, source } => format!(
            "{} {}: {source}",
            i18n::IMPORT_FAILED,
            i18n::import_invalid_record(index + 1)
        ),
        RosterDocumentError::Serialize(source) => {
            format!("{} ({source})", i18n::EXPORT_FAILED)
        }
    }
}
