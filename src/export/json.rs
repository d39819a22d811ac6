use serde::Serialize;

use crate::export::ExportError;

/// Serializes records into the camelCase JSON payload shape the import API
/// consumes. The models carry the casing on their serde derives, so any
/// record slice works here.
pub fn to_json_payload<T: Serialize + ?Sized>(records: &T) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(records)?)
}
