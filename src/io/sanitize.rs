//! Value sanitization for document encoding.
//!
//! The document writers never serialize typed records directly; every
//! record passes through [`to_document_value`] first, the single point
//! where typed representations become plain JSON values. Absent optionals
//! become key absence or null per their serde attributes, and a value that
//! cannot be represented raises instead of being silently dropped.

use crate::{Error, Result};
use serde::Serialize;
use serde_json::Value;

/// Projects a record into a plain JSON value suitable for document output.
///
/// # Errors
///
/// Returns an error if the record cannot be represented as a JSON value,
/// e.g. a non-finite float or a map with non-string keys. The failure is
/// surfaced immediately; no partial record is emitted.
pub fn to_document_value<T: Serialize>(record: &T) -> Result<Value> {
    serde_json::to_value(record).map_err(|e| Error::OperationFailed {
        operation: "encode_record".to_string(),
        cause: e.to_string(),
    })
}
