use crate::{AsJson, InvalidPrimitive, JsonKind, PrimitiveKind, TryFromJson};
use langtag::LangTag;
use std::{fmt, ops::Deref};

/// `rdf:langString` value.
///
/// The JSON form of a language-tagged string is identical to a plain string.
/// Its only distinction is the kind it was decoded as, which follows the
/// candidate order declared by the property.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(transparent)
)]
pub struct LangString(String);

impl LangString {
	pub fn new(value: String) -> Self {
		Self(value)
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_string(self) -> String {
		self.0
	}
}

impl Deref for LangString {
	type Target = str;

	fn deref(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for LangString {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.0.fmt(f)
	}
}

impl TryFromJson for LangString {
	type Error = InvalidPrimitive;

	fn try_from_json(value: &serde_json::Value) -> Result<Self, Self::Error> {
		match value {
			serde_json::Value::String(s) => Ok(Self(s.clone())),
			unexpected => Err(InvalidPrimitive::Unexpected(
				JsonKind::of(unexpected),
				PrimitiveKind::LangString,
			)),
		}
	}
}

impl AsJson for LangString {
	fn as_json(&self) -> serde_json::Value {
		serde_json::Value::String(self.0.clone())
	}
}

/// BCP 47 language tag that may not be well-formed.
///
/// Tags are kept verbatim; use [`LanguageTag::is_well_formed`] to validate.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(transparent)
)]
pub struct LanguageTag(String);

impl LanguageTag {
	pub fn new(tag: String) -> Self {
		Self(tag)
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn is_well_formed(&self) -> bool {
		LangTag::new(self.as_str()).is_ok()
	}

	pub fn as_well_formed(&self) -> Option<&LangTag> {
		LangTag::new(self.as_str()).ok()
	}
}

impl fmt::Display for LanguageTag {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.0.fmt(f)
	}
}

impl TryFromJson for LanguageTag {
	type Error = InvalidPrimitive;

	fn try_from_json(value: &serde_json::Value) -> Result<Self, Self::Error> {
		match value {
			serde_json::Value::String(s) => Ok(Self(s.clone())),
			unexpected => Err(InvalidPrimitive::Unexpected(
				JsonKind::of(unexpected),
				PrimitiveKind::LanguageTag,
			)),
		}
	}
}

impl AsJson for LanguageTag {
	fn as_json(&self) -> serde_json::Value {
		serde_json::Value::String(self.0.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lenient_tags() {
		assert!(LanguageTag::new("en-GB".to_owned()).is_well_formed());
		let tag = LanguageTag::try_from_json(&serde_json::json!("not a tag!")).unwrap();
		assert!(!tag.is_well_formed());
		assert_eq!(tag.as_json(), serde_json::json!("not a tag!"))
	}
}
