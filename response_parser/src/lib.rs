//! Extraction and validation of damage assessments from model output.
//!
//! Multimodal models rarely return bare JSON even when told to: the object
//! is usually wrapped in prose or markdown fences. This crate locates the
//! JSON object inside the raw text, then checks it field by field against
//! the assessment schema, keeping malformed JSON and schema violations
//! distinguishable so callers can log what actually went wrong before
//! falling back.

pub mod errors;
pub mod extractor;
pub mod validator;

pub use errors::{ParserError, ParserResult, SchemaError};
pub use extractor::extract_json_object;
pub use validator::{parse_assessment, validate_assessment};
