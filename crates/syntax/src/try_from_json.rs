use crate::{InvalidPrimitive, JsonKind, PrimitiveKind};

/// Decoding from a borrowed JSON value.
///
/// Decoders borrow their input so that a failed attempt leaves the value
/// available to the next candidate decoder.
pub trait TryFromJson: Sized {
	type Error;

	fn try_from_json(value: &serde_json::Value) -> Result<Self, Self::Error>;
}

/// Encoding into a JSON value.
pub trait AsJson {
	fn as_json(&self) -> serde_json::Value;
}

impl<T: AsJson> AsJson for Box<T> {
	fn as_json(&self) -> serde_json::Value {
		T::as_json(self)
	}
}

impl<T: AsJson> AsJson for Option<T> {
	fn as_json(&self) -> serde_json::Value {
		match self {
			Some(t) => t.as_json(),
			None => serde_json::Value::Null,
		}
	}
}

impl TryFromJson for String {
	type Error = InvalidPrimitive;

	fn try_from_json(value: &serde_json::Value) -> Result<Self, Self::Error> {
		match value {
			serde_json::Value::String(s) => Ok(s.clone()),
			unexpected => Err(InvalidPrimitive::Unexpected(
				JsonKind::of(unexpected),
				PrimitiveKind::String,
			)),
		}
	}
}

impl AsJson for String {
	fn as_json(&self) -> serde_json::Value {
		serde_json::Value::String(self.clone())
	}
}

impl TryFromJson for bool {
	type Error = InvalidPrimitive;

	fn try_from_json(value: &serde_json::Value) -> Result<Self, Self::Error> {
		match value {
			serde_json::Value::Bool(b) => Ok(*b),
			unexpected => Err(InvalidPrimitive::Unexpected(
				JsonKind::of(unexpected),
				PrimitiveKind::Boolean,
			)),
		}
	}
}

impl AsJson for bool {
	fn as_json(&self) -> serde_json::Value {
		serde_json::Value::Bool(*self)
	}
}
