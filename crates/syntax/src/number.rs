use crate::{AsJson, InvalidPrimitive, JsonKind, PrimitiveKind, TryFromJson};
use std::fmt;

/// Largest integer exactly representable by an `f64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// `xsd:float` value.
///
/// Remembers whether it was written as a JSON integer, so that
/// `"latitude": 36` and `"latitude": 36.0` are each reproduced as is.
/// Equality and ordering only consider the numeric value.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(from = "f64", into = "f64")
)]
pub struct Float {
	value: f64,
	integral: bool,
}

impl Float {
	/// Creates a new float.
	///
	/// Whole values within the safe integer range are written as JSON
	/// integers.
	pub fn new(value: f64) -> Self {
		Self {
			value,
			integral: value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER,
		}
	}

	/// Creates a float that is always written with a fractional part.
	pub fn decimal(value: f64) -> Self {
		Self {
			value,
			integral: false,
		}
	}

	pub fn value(&self) -> f64 {
		self.value
	}
}

impl PartialEq for Float {
	fn eq(&self, other: &Self) -> bool {
		self.value == other.value
	}
}

impl PartialOrd for Float {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		self.value.partial_cmp(&other.value)
	}
}

impl From<f64> for Float {
	fn from(value: f64) -> Self {
		Self::new(value)
	}
}

impl From<Float> for f64 {
	fn from(value: Float) -> Self {
		value.value
	}
}

impl fmt::Display for Float {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.value.fmt(f)
	}
}

impl TryFromJson for Float {
	type Error = InvalidPrimitive;

	fn try_from_json(value: &serde_json::Value) -> Result<Self, Self::Error> {
		match value {
			serde_json::Value::Number(n) => match n.as_f64() {
				Some(value) if n.is_f64() => Ok(Self::decimal(value)),
				Some(value) => Ok(Self::new(value)),
				None => Err(InvalidPrimitive::InvalidLexicalValue(
					PrimitiveKind::Float,
					n.to_string(),
				)),
			},
			unexpected => Err(InvalidPrimitive::Unexpected(
				JsonKind::of(unexpected),
				PrimitiveKind::Float,
			)),
		}
	}
}

impl AsJson for Float {
	fn as_json(&self) -> serde_json::Value {
		let f = self.value;
		if self.integral && f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER {
			serde_json::Value::Number((f as i64).into())
		} else {
			serde_json::Number::from_f64(f)
				.map(serde_json::Value::Number)
				.unwrap_or(serde_json::Value::Null)
		}
	}
}

/// `xsd:nonNegativeInteger` value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(transparent)
)]
pub struct NonNegativeInteger(u64);

impl NonNegativeInteger {
	pub fn new(value: u64) -> Self {
		Self(value)
	}

	pub fn value(&self) -> u64 {
		self.0
	}
}

impl From<u64> for NonNegativeInteger {
	fn from(value: u64) -> Self {
		Self(value)
	}
}

impl fmt::Display for NonNegativeInteger {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.0.fmt(f)
	}
}

impl TryFromJson for NonNegativeInteger {
	type Error = InvalidPrimitive;

	fn try_from_json(value: &serde_json::Value) -> Result<Self, Self::Error> {
		match value {
			serde_json::Value::Number(n) => n.as_u64().map(Self).ok_or_else(|| {
				InvalidPrimitive::InvalidLexicalValue(
					PrimitiveKind::NonNegativeInteger,
					n.to_string(),
				)
			}),
			unexpected => Err(InvalidPrimitive::Unexpected(
				JsonKind::of(unexpected),
				PrimitiveKind::NonNegativeInteger,
			)),
		}
	}
}

impl AsJson for NonNegativeInteger {
	fn as_json(&self) -> serde_json::Value {
		serde_json::Value::Number(self.0.into())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn integral_float() {
		let f = Float::try_from_json(&json!(36)).unwrap();
		assert_eq!(f.value(), 36.0);
		assert_eq!(f.as_json(), json!(36))
	}

	#[test]
	fn whole_decimal_float() {
		let f = Float::try_from_json(&json!(36.0)).unwrap();
		assert_eq!(f.as_json(), json!(36.0));
		assert_eq!(f, Float::try_from_json(&json!(36)).unwrap());
		assert_eq!(Float::new(2.0).as_json(), json!(2))
	}

	#[test]
	fn fractional_float() {
		let f = Float::try_from_json(&json!(-119.7)).unwrap();
		assert_eq!(f.as_json(), json!(-119.7))
	}

	#[test]
	fn non_negative_integer() {
		assert_eq!(
			NonNegativeInteger::try_from_json(&json!(42)).unwrap().value(),
			42
		);
		assert!(NonNegativeInteger::try_from_json(&json!(-1)).is_err());
		assert!(NonNegativeInteger::try_from_json(&json!(1.5)).is_err());
		assert!(NonNegativeInteger::try_from_json(&json!("42")).is_err())
	}
}
