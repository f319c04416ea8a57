use crate::{AsJson, InvalidPrimitive, JsonKind, PrimitiveKind, TryFromJson};
use chrono::{FixedOffset, SecondsFormat};
use std::{fmt, str::FromStr};

/// `xsd:dateTime` value.
///
/// Accepts RFC 3339 timestamps, and the seconds-less `YYYY-MM-DDThh:mmZ`
/// variant found in the wild. Always serialized in RFC 3339 form, using
/// `Z` for UTC and fractional seconds only when present.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct DateTime(chrono::DateTime<FixedOffset>);

impl DateTime {
	pub fn new(value: chrono::DateTime<FixedOffset>) -> Self {
		Self(value)
	}

	pub fn parse(s: &str) -> Result<Self, InvalidPrimitive> {
		let invalid = || InvalidPrimitive::InvalidLexicalValue(PrimitiveKind::DateTime, s.to_owned());

		match chrono::DateTime::parse_from_rfc3339(s) {
			Ok(value) => Ok(Self(value)),
			Err(_) => {
				let completed = complete_seconds(s).ok_or_else(invalid)?;
				chrono::DateTime::parse_from_rfc3339(&completed)
					.map(Self)
					.map_err(|_| invalid())
			}
		}
	}

	pub fn as_chrono(&self) -> &chrono::DateTime<FixedOffset> {
		&self.0
	}

	pub fn into_chrono(self) -> chrono::DateTime<FixedOffset> {
		self.0
	}
}

/// Inserts the missing `:00` seconds field of a `YYYY-MM-DDThh:mm<offset>`
/// timestamp.
fn complete_seconds(s: &str) -> Option<String> {
	let t = s.find(['T', 't'])?;
	let time = &s[t + 1..];
	let bytes = time.as_bytes();

	if bytes.len() > 5
		&& bytes[2] == b':'
		&& bytes[..2].iter().all(u8::is_ascii_digit)
		&& bytes[3..5].iter().all(u8::is_ascii_digit)
		&& matches!(bytes[5], b'Z' | b'z' | b'+' | b'-')
	{
		let split = t + 1 + 5;
		Some(format!("{}:00{}", &s[..split], &s[split..]))
	} else {
		None
	}
}

impl From<chrono::DateTime<FixedOffset>> for DateTime {
	fn from(value: chrono::DateTime<FixedOffset>) -> Self {
		Self(value)
	}
}

impl FromStr for DateTime {
	type Err = InvalidPrimitive;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl fmt::Display for DateTime {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true).fmt(f)
	}
}

#[cfg(feature = "serde")]
impl serde::Serialize for DateTime {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.collect_str(self)
	}
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DateTime {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let s = <String as serde::Deserialize>::deserialize(deserializer)?;
		s.parse().map_err(serde::de::Error::custom)
	}
}

impl TryFromJson for DateTime {
	type Error = InvalidPrimitive;

	fn try_from_json(value: &serde_json::Value) -> Result<Self, Self::Error> {
		match value {
			serde_json::Value::String(s) => Self::parse(s),
			unexpected => Err(InvalidPrimitive::Unexpected(
				JsonKind::of(unexpected),
				PrimitiveKind::DateTime,
			)),
		}
	}
}

impl AsJson for DateTime {
	fn as_json(&self) -> serde_json::Value {
		serde_json::Value::String(self.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn rfc3339() {
		let t = DateTime::try_from_json(&json!("2015-01-25T12:34:56Z")).unwrap();
		assert_eq!(t.as_json(), json!("2015-01-25T12:34:56Z"))
	}

	#[test]
	fn fractional_seconds_and_offset() {
		let t = DateTime::parse("2014-12-12T12:12:12.123+02:00").unwrap();
		assert_eq!(t.to_string(), "2014-12-12T12:12:12.123+02:00")
	}

	#[test]
	fn missing_seconds() {
		let t = DateTime::parse("2015-01-25T12:34Z").unwrap();
		assert_eq!(t.to_string(), "2015-01-25T12:34:00Z")
	}

	#[test]
	fn invalid() {
		assert!(DateTime::parse("yesterday").is_err());
		assert!(DateTime::try_from_json(&json!(1421)).is_err())
	}
}
