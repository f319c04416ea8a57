use crate::{AsJson, InvalidPrimitive, JsonKind, TryFromJson};
use iref::IriBuf;

impl TryFromJson for IriBuf {
	type Error = InvalidPrimitive;

	fn try_from_json(value: &serde_json::Value) -> Result<Self, Self::Error> {
		match value {
			serde_json::Value::String(s) => {
				IriBuf::new(s.clone()).map_err(|e| InvalidPrimitive::InvalidIri(e.0))
			}
			unexpected => Err(InvalidPrimitive::NotAnIri(JsonKind::of(unexpected))),
		}
	}
}

impl AsJson for IriBuf {
	fn as_json(&self) -> serde_json::Value {
		serde_json::Value::String(self.as_str().to_owned())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn absolute_iri() {
		let iri = IriBuf::try_from_json(&json!("https://example.com/a")).unwrap();
		assert_eq!(iri.as_str(), "https://example.com/a");
		assert_eq!(iri.as_json(), json!("https://example.com/a"))
	}

	#[test]
	fn missing_scheme() {
		assert!(matches!(
			IriBuf::try_from_json(&json!("Arrive")),
			Err(InvalidPrimitive::InvalidIri(_))
		))
	}

	#[test]
	fn not_a_string() {
		assert_eq!(
			IriBuf::try_from_json(&json!(12)),
			Err(InvalidPrimitive::NotAnIri(JsonKind::Number))
		)
	}
}
