use json_ld_vocab_syntax::JsonKind;

/// Decoding or mutation error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// Decoding of a type-tagged embedded object failed.
	#[error("invalid `{property}` value of type `{ty}`: {source}")]
	StructuralMismatch {
		property: String,
		ty: String,
		source: Box<Error>,
	},

	#[error("expected a JSON object, found {0}")]
	NotAnObject(JsonKind),

	#[error("missing `type` entry")]
	MissingType,

	#[error("unknown type `{}`", .0.join("`, `"))]
	UnknownType(Vec<String>),

	#[error("undefined type `{0}`")]
	UndefinedType(String),

	#[error("functional property `{0}` cannot hold an array")]
	FunctionalArray(String),

	#[error("maximum nesting depth of {0} exceeded")]
	DepthLimitExceeded(usize),

	#[error("`{property}` holds {len} values, more than the limit of {limit}")]
	WidthLimitExceeded {
		property: String,
		len: usize,
		limit: usize,
	},

	#[error("undeclared property `{0}`")]
	UndeclaredProperty(String),

	#[error("property `{0}` is functional")]
	Functional(String),

	#[error("property `{0}` is not functional")]
	NotFunctional(String),

	#[error("property `{property}` does not accept {found}")]
	UnacceptedValue { property: String, found: String },

	#[error(transparent)]
	Json(#[from] serde_json::Error),
}

impl Error {
	/// Property path leading to the error, outermost first.
	pub fn path(&self) -> Vec<&str> {
		let mut path = Vec::new();
		let mut e = self;
		while let Self::StructuralMismatch {
			property, source, ..
		} = e
		{
			path.push(property.as_str());
			e = source.as_ref();
		}
		path
	}

	/// Innermost error, below any structural mismatch.
	pub fn root_cause(&self) -> &Self {
		match self {
			Self::StructuralMismatch { source, .. } => source.root_cause(),
			e => e,
		}
	}
}

/// Invalid schema definitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
	#[error("duplicate property definition `{0}`")]
	DuplicateProperty(String),

	#[error("duplicate type definition `{0}`")]
	DuplicateType(String),

	#[error("type `{ty}` extends undefined type `{parent}`")]
	UndefinedParent { ty: String, parent: String },

	#[error("type `{ty}` uses undefined property `{property}`")]
	UndefinedProperty { ty: String, property: String },

	#[error("cyclic inheritance involving `{0}`")]
	CyclicInheritance(String),

	#[error("property `{property}` of type `{ty}` collides with a language map key")]
	MapKeyCollision { ty: String, property: String },
}
