use genescope_core::record::{GeneRecord, RecordField};
use serde_json::Value;

use crate::FormatError;

/// Parse the record file payload: a JSON array of objects keyed by field name.
///
/// Values that are not JSON strings are read as absent and unknown keys are
/// skipped. Anything other than an array of objects fails as a whole; no
/// partial list is returned.
pub fn parse(input: &str) -> Result<Vec<GeneRecord>, FormatError> {
    let root: Value = serde_json::from_str(input)?;

    let Value::Array(rows) = root else {
        return Err(FormatError::InvalidPayload(
            "expected a JSON array of records".to_string(),
        ));
    };

    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        let Value::Object(map) = row else {
            return Err(FormatError::InvalidPayload(format!(
                "record {} is not an object",
                i
            )));
        };

        let mut record = GeneRecord::default();
        for (key, value) in map {
            let Some(field) = RecordField::from_key(&key) else {
                continue;
            };
            if let Value::String(text) = value {
                record = record.with(field, text);
            }
        }
        records.push(record);
    }

    Ok(records)
}
