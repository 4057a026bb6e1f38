//! Import/export document: a JSON array of participant records.

use crate::error::RosterDocumentError;
use partysplit_domain::{Participant, Roster};
use serde_json::Value;

/// Pretty-printed document with two-space indentation.
pub fn encode_roster(roster: &Roster) -> Result<String, RosterDocumentError> {
    serde_json::to_string_pretty(roster).map_err(RosterDocumentError::Serialize)
}

/// Parses a document, accepting only a top-level array.
///
/// Record fields that are absent take the values of a fresh participant.
pub fn decode_roster(text: &str) -> Result<Roster, RosterDocumentError> {
    let value: Value = serde_json::from_str(text).map_err(RosterDocumentError::Malformed)?;

    let records = match value {
        Value::Array(records) => records,
        other => {
            return Err(RosterDocumentError::NotAnArray {
                found: json_kind(&other),
            });
        }
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value::<Participant>(record)
                .map_err(|source| RosterDocumentError::InvalidRecord { index, source })
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn encodes_records_in_field_order() {
        let roster = Roster::new(vec![Participant::new("Ana", 12.5, "ana.mp")]);

        let document = encode_roster(&roster).expect("serializable");

        assert_eq!(
            document,
            "[\n  {\n    \"name\": \"Ana\",\n    \"spent\": 12.5,\n    \"alias\": \"ana.mp\",\n    \"enabled\": true\n  }\n]"
        );
    }

    #[test]
    fn decodes_exported_document() {
        let roster = Roster::new(vec![
            Participant::new("Ana", 12.5, "ana.mp"),
            Participant::new("Beto", 0.0, "").disabled(),
        ]);
        let document = encode_roster(&roster).expect("serializable");

        assert_eq!(decode_roster(&document).expect("valid document"), roster);
    }

    #[test]
    fn decodes_partial_records_with_defaults() {
        let roster =
            decode_roster(r#"[{"name": "Ana", "spent": 3}, {}]"#).expect("valid document");

        assert_eq!(
            roster.participants(),
            &[Participant::new("Ana", 3.0, ""), Participant::default()]
        );
    }

    #[test]
    fn empty_array_is_an_empty_roster() {
        assert!(decode_roster("[]").expect("valid document").is_empty());
    }

    #[rstest]
    #[case::object(r#"{"name": "Ana"}"#, "an object")]
    #[case::string(r#""people""#, "a string")]
    #[case::number("42", "a number")]
    #[case::null("null", "null")]
    fn rejects_non_array_documents(#[case] text: &str, #[case] expected: &str) {
        match decode_roster(text) {
            Err(RosterDocumentError::NotAnArray { found }) => assert_eq!(found, expected),
            other => panic!("expected NotAnArray, got {other:?}"),
        }
    }

    #[rstest]
    #[case::truncated(r#"[{"name": "Ana""#)]
    #[case::empty("")]
    #[case::not_json("Ana,12")]
    fn rejects_malformed_json(#[case] text: &str) {
        assert!(matches!(
            decode_roster(text),
            Err(RosterDocumentError::Malformed(_))
        ));
    }

    #[rstest]
    #[case::spent_as_text(r#"[{"name": "Ana"}, {"spent": "ten"}]"#, 1)]
    #[case::null_record(r#"[null]"#, 0)]
    #[case::bare_number(r#"[{"name": "Ana"}, {"name": "Beto"}, 7]"#, 2)]
    fn rejects_records_of_the_wrong_shape(#[case] text: &str, #[case] expected_index: usize) {
        match decode_roster(text) {
            Err(RosterDocumentError::InvalidRecord { index, .. }) => {
                assert_eq!(index, expected_index)
            }
            other => panic!("expected InvalidRecord, got {other:?}"),
        }
    }
}
