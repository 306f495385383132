//! Locates the JSON object inside arbitrary model text.

use crate::errors::{ParserError, ParserResult};

/// Return the substring spanning the first `{` to the last `}`.
///
/// Greedy on purpose: an assessment is a single object with nested braces,
/// so the widest span covers the whole object even when the model wraps it
/// in markdown fences or prose on both sides.
pub fn extract_json_object(text: &str) -> ParserResult<&str> {
    let start = text.find('{').ok_or(ParserError::NoJsonObject)?;
    let end = text.rfind('}').ok_or(ParserError::NoJsonObject)?;
    if end < start {
        return Err(ParserError::NoJsonObject);
    }
    Ok(&text[start..=end])
}
