use crate::{AsJson, InvalidPrimitive, JsonKind, PrimitiveKind, TryFromJson};
use std::fmt;

/// RFC 2045 media type.
///
/// Kept as the original string. Use [`MediaType::mime`] to parse it.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(transparent)
)]
pub struct MediaType(String);

impl MediaType {
	pub fn new(value: String) -> Self {
		Self(value)
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn mime(&self) -> Result<mime::Mime, mime::FromStrError> {
		self.0.parse()
	}
}

impl From<mime::Mime> for MediaType {
	fn from(value: mime::Mime) -> Self {
		Self(value.to_string())
	}
}

impl fmt::Display for MediaType {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.0.fmt(f)
	}
}

impl TryFromJson for MediaType {
	type Error = InvalidPrimitive;

	fn try_from_json(value: &serde_json::Value) -> Result<Self, Self::Error> {
		match value {
			serde_json::Value::String(s) => Ok(Self(s.clone())),
			unexpected => Err(InvalidPrimitive::Unexpected(
				JsonKind::of(unexpected),
				PrimitiveKind::MediaType,
			)),
		}
	}
}

impl AsJson for MediaType {
	fn as_json(&self) -> serde_json::Value {
		serde_json::Value::String(self.0.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn passthrough() {
		let t = MediaType::try_from_json(&serde_json::json!("text/html; charset=utf-8")).unwrap();
		assert_eq!(t.as_str(), "text/html; charset=utf-8");
		assert_eq!(t.mime().unwrap().subtype(), mime::HTML);
		assert!(MediaType::new("html".to_owned()).mime().is_err())
	}
}
