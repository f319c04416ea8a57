use std::fmt;

/// JSON value kind.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum JsonKind {
	Null,
	Boolean,
	Number,
	String,
	Array,
	Object,
}

impl JsonKind {
	/// Returns the kind of the given JSON value.
	pub fn of(value: &serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Self::Null,
			serde_json::Value::Bool(_) => Self::Boolean,
			serde_json::Value::Number(_) => Self::Number,
			serde_json::Value::String(_) => Self::String,
			serde_json::Value::Array(_) => Self::Array,
			serde_json::Value::Object(_) => Self::Object,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Boolean => "boolean",
			Self::Number => "number",
			Self::String => "string",
			Self::Array => "array",
			Self::Object => "object",
		}
	}
}

impl fmt::Display for JsonKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.as_str().fmt(f)
	}
}
