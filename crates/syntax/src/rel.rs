use crate::{AsJson, InvalidPrimitive, JsonKind, PrimitiveKind, TryFromJson};
use std::fmt;

/// RFC 5988 link relation.
///
/// A relation is a single token: it may not contain whitespace or commas.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct LinkRelation(String);

impl LinkRelation {
	pub fn new(value: String) -> Result<Self, String> {
		if !value.is_empty() && !value.contains(|c: char| c.is_whitespace() || c == ',') {
			Ok(Self(value))
		} else {
			Err(value)
		}
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for LinkRelation {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.0.fmt(f)
	}
}

#[cfg(feature = "serde")]
impl serde::Serialize for LinkRelation {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.collect_str(self)
	}
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LinkRelation {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let s = <String as serde::Deserialize>::deserialize(deserializer)?;
		Self::new(s).map_err(|s| {
			serde::de::Error::custom(format!("invalid link relation `{s}`"))
		})
	}
}

impl TryFromJson for LinkRelation {
	type Error = InvalidPrimitive;

	fn try_from_json(value: &serde_json::Value) -> Result<Self, Self::Error> {
		match value {
			serde_json::Value::String(s) => Self::new(s.clone()).map_err(|s| {
				InvalidPrimitive::InvalidLexicalValue(PrimitiveKind::LinkRelation, s)
			}),
			unexpected => Err(InvalidPrimitive::Unexpected(
				JsonKind::of(unexpected),
				PrimitiveKind::LinkRelation,
			)),
		}
	}
}

impl AsJson for LinkRelation {
	fn as_json(&self) -> serde_json::Value {
		serde_json::Value::String(self.0.clone())
	}
}
