use std::{borrow::Borrow, borrow::Cow, fmt};

/// Structural role an entity may satisfy.
///
/// Each entity type satisfies the capability named after itself and every
/// capability of the types it extends. An `Image` is `Image`-like,
/// `Document`-like and `Object`-like, a `Mention` is `Mention`-like and
/// `Link`-like.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Capability(Cow<'static, str>);

impl Capability {
	pub const fn from_static(name: &'static str) -> Self {
		Self(Cow::Borrowed(name))
	}

	pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
		Self(name.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Borrow<str> for Capability {
	fn borrow(&self) -> &str {
		self.as_str()
	}
}

impl AsRef<str> for Capability {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}

impl fmt::Display for Capability {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.0.fmt(f)
	}
}
