//! JSON rendering shared by every cfmeta output.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::errors::CoreError;

/// Pretty-print `value` with `indent` spaces per nesting level.
///
/// # Errors
/// Returns `CoreError::Serialization` if `value` cannot be encoded.
pub fn to_json_pretty<T: Serialize + ?Sized>(
    value: &T,
    indent: usize,
) -> Result<String, CoreError> {
    let indent = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| CoreError::Encoding(e.to_string()))
}
