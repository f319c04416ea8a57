use crate::{
	AsJson, DateTime, Duration, Float, InvalidPrimitive, LangString, LanguageTag, LinkRelation,
	MediaType, NonNegativeInteger, TryFromJson,
};
use std::fmt;

/// Primitive datatype accepted by a vocabulary property.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum PrimitiveKind {
	/// `xsd:string`.
	String,

	/// `rdf:langString`.
	LangString,

	/// `xsd:dateTime`.
	DateTime,

	/// `xsd:duration`.
	Duration,

	/// RFC 2045 media type.
	MediaType,

	/// `xsd:float`.
	Float,

	/// `xsd:nonNegativeInteger`.
	NonNegativeInteger,

	/// `xsd:boolean`.
	Boolean,

	/// BCP 47 language tag.
	LanguageTag,

	/// RFC 5988 link relation.
	LinkRelation,
}

impl PrimitiveKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::String => "xsd:string",
			Self::LangString => "rdf:langString",
			Self::DateTime => "xsd:dateTime",
			Self::Duration => "xsd:duration",
			Self::MediaType => "rfc2045:mediaType",
			Self::Float => "xsd:float",
			Self::NonNegativeInteger => "xsd:nonNegativeInteger",
			Self::Boolean => "xsd:boolean",
			Self::LanguageTag => "bcp47:languageTag",
			Self::LinkRelation => "rfc5988:linkRelation",
		}
	}
}

impl fmt::Display for PrimitiveKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.as_str().fmt(f)
	}
}

/// Primitive value.
#[derive(Clone, PartialEq, Debug)]
pub enum Primitive {
	String(String),
	LangString(LangString),
	DateTime(DateTime),
	Duration(Duration),
	MediaType(MediaType),
	Float(Float),
	NonNegativeInteger(NonNegativeInteger),
	Boolean(bool),
	LanguageTag(LanguageTag),
	LinkRelation(LinkRelation),
}

impl Primitive {
	/// Decodes `value` as a primitive of the given `kind`.
	pub fn try_from_json_as(
		kind: PrimitiveKind,
		value: &serde_json::Value,
	) -> Result<Self, InvalidPrimitive> {
		match kind {
			PrimitiveKind::String => String::try_from_json(value).map(Self::String),
			PrimitiveKind::LangString => LangString::try_from_json(value).map(Self::LangString),
			PrimitiveKind::DateTime => DateTime::try_from_json(value).map(Self::DateTime),
			PrimitiveKind::Duration => Duration::try_from_json(value).map(Self::Duration),
			PrimitiveKind::MediaType => MediaType::try_from_json(value).map(Self::MediaType),
			PrimitiveKind::Float => Float::try_from_json(value).map(Self::Float),
			PrimitiveKind::NonNegativeInteger => {
				NonNegativeInteger::try_from_json(value).map(Self::NonNegativeInteger)
			}
			PrimitiveKind::Boolean => bool::try_from_json(value).map(Self::Boolean),
			PrimitiveKind::LanguageTag => LanguageTag::try_from_json(value).map(Self::LanguageTag),
			PrimitiveKind::LinkRelation => {
				LinkRelation::try_from_json(value).map(Self::LinkRelation)
			}
		}
	}

	pub fn kind(&self) -> PrimitiveKind {
		match self {
			Self::String(_) => PrimitiveKind::String,
			Self::LangString(_) => PrimitiveKind::LangString,
			Self::DateTime(_) => PrimitiveKind::DateTime,
			Self::Duration(_) => PrimitiveKind::Duration,
			Self::MediaType(_) => PrimitiveKind::MediaType,
			Self::Float(_) => PrimitiveKind::Float,
			Self::NonNegativeInteger(_) => PrimitiveKind::NonNegativeInteger,
			Self::Boolean(_) => PrimitiveKind::Boolean,
			Self::LanguageTag(_) => PrimitiveKind::LanguageTag,
			Self::LinkRelation(_) => PrimitiveKind::LinkRelation,
		}
	}

	/// Returns the string content of string-like primitives.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(s) => Some(s),
			Self::LangString(s) => Some(s.as_str()),
			Self::MediaType(m) => Some(m.as_str()),
			Self::LanguageTag(t) => Some(t.as_str()),
			Self::LinkRelation(r) => Some(r.as_str()),
			_ => None,
		}
	}

	pub fn as_date_time(&self) -> Option<&DateTime> {
		match self {
			Self::DateTime(t) => Some(t),
			_ => None,
		}
	}

	pub fn as_duration(&self) -> Option<&Duration> {
		match self {
			Self::Duration(d) => Some(d),
			_ => None,
		}
	}

	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Float(f) => Some(f.value()),
			Self::NonNegativeInteger(n) => Some(n.value() as f64),
			_ => None,
		}
	}

	pub fn as_u64(&self) -> Option<u64> {
		match self {
			Self::NonNegativeInteger(n) => Some(n.value()),
			_ => None,
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Boolean(b) => Some(*b),
			_ => None,
		}
	}
}

impl AsJson for Primitive {
	fn as_json(&self) -> serde_json::Value {
		match self {
			Self::String(s) => s.as_json(),
			Self::LangString(s) => s.as_json(),
			Self::DateTime(t) => t.as_json(),
			Self::Duration(d) => d.as_json(),
			Self::MediaType(m) => m.as_json(),
			Self::Float(f) => f.as_json(),
			Self::NonNegativeInteger(n) => n.as_json(),
			Self::Boolean(b) => b.as_json(),
			Self::LanguageTag(t) => t.as_json(),
			Self::LinkRelation(r) => r.as_json(),
		}
	}
}

/// Serializes the primitive as its JSON form.
///
/// There is no matching `Deserialize` implementation since the kind cannot
/// be recovered from the JSON form alone. Use [`Primitive::try_from_json_as`].
#[cfg(feature = "serde")]
impl serde::Serialize for Primitive {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serde::Serialize::serialize(&self.as_json(), serializer)
	}
}

impl From<String> for Primitive {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<&str> for Primitive {
	fn from(value: &str) -> Self {
		Self::String(value.to_owned())
	}
}

impl From<bool> for Primitive {
	fn from(value: bool) -> Self {
		Self::Boolean(value)
	}
}

impl From<DateTime> for Primitive {
	fn from(value: DateTime) -> Self {
		Self::DateTime(value)
	}
}

impl From<Duration> for Primitive {
	fn from(value: Duration) -> Self {
		Self::Duration(value)
	}
}

impl From<LangString> for Primitive {
	fn from(value: LangString) -> Self {
		Self::LangString(value)
	}
}

impl From<MediaType> for Primitive {
	fn from(value: MediaType) -> Self {
		Self::MediaType(value)
	}
}

impl From<Float> for Primitive {
	fn from(value: Float) -> Self {
		Self::Float(value)
	}
}

impl From<NonNegativeInteger> for Primitive {
	fn from(value: NonNegativeInteger) -> Self {
		Self::NonNegativeInteger(value)
	}
}

impl From<LanguageTag> for Primitive {
	fn from(value: LanguageTag) -> Self {
		Self::LanguageTag(value)
	}
}

impl From<LinkRelation> for Primitive {
	fn from(value: LinkRelation) -> Self {
		Self::LinkRelation(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn dispatch() {
		let value = json!("PT5M");
		assert!(Primitive::try_from_json_as(PrimitiveKind::DateTime, &value).is_err());
		let d = Primitive::try_from_json_as(PrimitiveKind::Duration, &value).unwrap();
		assert_eq!(d.kind(), PrimitiveKind::Duration);
		assert_eq!(d.as_json(), value)
	}

	#[test]
	fn string_and_lang_string_share_their_json_form() {
		let value = json!("Hello");
		let s = Primitive::try_from_json_as(PrimitiveKind::String, &value).unwrap();
		let l = Primitive::try_from_json_as(PrimitiveKind::LangString, &value).unwrap();
		assert_ne!(s, l);
		assert_eq!(s.as_str(), l.as_str());
		assert_eq!(s.as_json(), l.as_json())
	}

	#[cfg(feature = "serde")]
	#[test]
	fn serde_uses_the_json_form() {
		let value = Primitive::try_from_json_as(PrimitiveKind::Duration, &json!("PT90M")).unwrap();
		assert_eq!(serde_json::to_value(&value).unwrap(), json!("PT1H30M"));

		let d: Duration = serde_json::from_value(json!("PT5M")).unwrap();
		assert_eq!(d.to_string(), "PT5M");

		let t: DateTime = serde_json::from_value(json!("2024-01-01T00:00:00Z")).unwrap();
		assert_eq!(serde_json::to_value(t).unwrap(), json!("2024-01-01T00:00:00Z"));

		assert!(serde_json::from_value::<LinkRelation>(json!("a b")).is_err())
	}
}
