/// Default nesting limit for type-tagged objects.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// What to do with a JSON array given for a functional property.
///
/// Functional properties hold at most one value and never serialize as an
/// array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FunctionalArrayPolicy {
	/// Keep the whole array as the unknown value of the property.
	///
	/// Nothing is lost and the array is reproduced on output.
	#[default]
	Preserve,

	/// Decode the first element only, dropping the others.
	TakeFirst,

	/// Fail with [`Error::FunctionalArray`](crate::Error::FunctionalArray).
	Reject,
}

/// Decoding options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
	/// Handling of arrays given for functional properties.
	///
	/// Default is [`FunctionalArrayPolicy::Preserve`].
	pub functional_array: FunctionalArrayPolicy,

	/// Maximum nesting depth of type-tagged objects.
	///
	/// The top-level entity has depth 0. Defaults to
	/// [`DEFAULT_MAX_DEPTH`].
	pub max_depth: Option<usize>,

	/// Maximum number of values of a non-functional property.
	///
	/// Unbounded by default.
	pub max_width: Option<usize>,
}

impl Options {
	/// Rejects arrays given for functional properties.
	pub fn strict(self) -> Self {
		Self {
			functional_array: FunctionalArrayPolicy::Reject,
			..self
		}
	}

	pub fn with_functional_array(self, functional_array: FunctionalArrayPolicy) -> Self {
		Self {
			functional_array,
			..self
		}
	}

	pub fn with_max_depth(self, max_depth: Option<usize>) -> Self {
		Self { max_depth, ..self }
	}

	pub fn with_max_width(self, max_width: Option<usize>) -> Self {
		Self { max_width, ..self }
	}
}

impl Default for Options {
	fn default() -> Self {
		Self {
			functional_array: FunctionalArrayPolicy::default(),
			max_depth: Some(DEFAULT_MAX_DEPTH),
			max_width: None,
		}
	}
}
