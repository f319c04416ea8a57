//! Decoding warnings.
//!
//! Values that cannot be resolved against the declared candidates are
//! never an error: they are kept as opaque data and reported here.
use json_ld_vocab_syntax::JsonKind;
use std::fmt;

/// Warning handler.
///
/// This trait is implemented by the unit type `()` which ignores warnings,
/// and by `Vec` which collects them. You can use [`Print`] to print
/// warnings on the standard error output or implement your own handler.
pub trait Handler<W> {
	fn handle(&mut self, warning: W);
}

impl<W> Handler<W> for () {
	fn handle(&mut self, _warning: W) {}
}

impl<W, H: Handler<W>> Handler<W> for &mut H {
	fn handle(&mut self, warning: W) {
		H::handle(*self, warning)
	}
}

impl<W> Handler<W> for Vec<W> {
	fn handle(&mut self, warning: W) {
		self.push(warning)
	}
}

/// Prints warnings on the standard error output.
pub struct Print;

impl<W: fmt::Display> Handler<W> for Print {
	fn handle(&mut self, warning: W) {
		eprintln!("warning: {warning}")
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
	/// A type-tagged object names no type accepted by the property.
	UnresolvedType { property: String, types: Vec<String> },

	/// An embedded object has no `type` entry.
	UntypedObject(String),

	/// A value matches none of the primitive kinds accepted by the property.
	UnmatchedValue { property: String, found: JsonKind },

	/// An entry that is not a declared property.
	UnknownKey(String),

	/// A `<property>Map` entry that is not an object of strings.
	InvalidLanguageMap(String),

	/// An array given for a functional property.
	FunctionalArray { property: String, len: usize },
}

impl fmt::Display for Warning {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::UnresolvedType { property, types } => write!(
				f,
				"`{property}` does not accept objects of type `{}`",
				types.join("`, `")
			),
			Self::UntypedObject(property) => write!(f, "untyped object in `{property}`"),
			Self::UnmatchedValue { property, found } => {
				write!(f, "`{property}` does not accept this {found} value")
			}
			Self::UnknownKey(key) => write!(f, "unknown property `{key}`"),
			Self::InvalidLanguageMap(key) => write!(f, "invalid language map `{key}`"),
			Self::FunctionalArray { property, len } => {
				write!(f, "array of {len} values given for functional property `{property}`")
			}
		}
	}
}
