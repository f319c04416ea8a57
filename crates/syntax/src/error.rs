use crate::{JsonKind, PrimitiveKind};

/// Raised when a JSON value cannot be decoded as the requested primitive.
///
/// This is never fatal on its own: property values try their next
/// candidate decoder, and keep the raw value when none succeeds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPrimitive {
	#[error("expected {1}, found {0}")]
	Unexpected(JsonKind, PrimitiveKind),

	#[error("expected IRI, found {0}")]
	NotAnIri(JsonKind),

	#[error("invalid IRI `{0}`")]
	InvalidIri(String),

	#[error("invalid {0} `{1}`")]
	InvalidLexicalValue(PrimitiveKind, String),
}
