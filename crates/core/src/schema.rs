use crate::{Capability, SchemaError, Value};
use indexmap::IndexSet;
use json_ld_vocab_syntax::PrimitiveKind;
use std::{borrow::Cow, collections::HashMap, fmt, sync::Arc};

/// Entry holding the discriminators of an entity.
pub const TYPE_KEY: &str = "type";

/// JSON-LD context entry, accepted on input and always dropped.
pub const CONTEXT_KEY: &str = "@context";

/// Suffix appended to a property name to form its natural language map key.
pub const MAP_SUFFIX: &str = "Map";

/// Kind of value accepted by a property.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum ValueKind {
	/// Embedded entity satisfying the given capability.
	Entity(Capability),

	/// Bare IRI.
	Iri,

	/// Primitive literal.
	Primitive(PrimitiveKind),
}

impl ValueKind {
	pub fn capability(&self) -> Option<&Capability> {
		match self {
			Self::Entity(c) => Some(c),
			_ => None,
		}
	}
}

impl From<Capability> for ValueKind {
	fn from(value: Capability) -> Self {
		Self::Entity(value)
	}
}

impl From<PrimitiveKind> for ValueKind {
	fn from(value: PrimitiveKind) -> Self {
		Self::Primitive(value)
	}
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Entity(c) => write!(f, "{c} entity"),
			Self::Iri => f.write_str("IRI"),
			Self::Primitive(p) => p.fmt(f),
		}
	}
}

/// Property declaration.
///
/// The accepted kinds are listed in priority order: when decoding, the
/// first kind a JSON value can be resolved as wins.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PropertyDefinition {
	name: Cow<'static, str>,
	functional: bool,
	accepts: Vec<ValueKind>,
	map_key: Option<String>,
	unknown_in_bag: bool,
}

impl PropertyDefinition {
	/// Declares a single-valued property.
	pub fn functional(
		name: impl Into<Cow<'static, str>>,
		accepts: impl IntoIterator<Item = ValueKind>,
	) -> Self {
		Self {
			name: name.into(),
			functional: true,
			accepts: accepts.into_iter().collect(),
			map_key: None,
			unknown_in_bag: false,
		}
	}

	/// Declares a multi-valued, ordered property.
	pub fn non_functional(
		name: impl Into<Cow<'static, str>>,
		accepts: impl IntoIterator<Item = ValueKind>,
	) -> Self {
		Self {
			functional: false,
			..Self::functional(name, accepts)
		}
	}

	/// Declares the `<name>Map` natural language map of this property.
	pub fn with_natural_language(mut self) -> Self {
		self.map_key = Some(format!("{}{MAP_SUFFIX}", self.name));
		self
	}

	/// Unmatched values of this property are stored in the unknown
	/// properties of the entity, under the property name, instead of the
	/// property itself.
	///
	/// Only meaningful for functional properties.
	pub fn with_unknown_in_bag(mut self) -> Self {
		self.unknown_in_bag = true;
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn is_functional(&self) -> bool {
		self.functional
	}

	pub fn accepts(&self) -> &[ValueKind] {
		&self.accepts
	}

	/// Accepted capabilities, in priority order.
	pub fn capabilities(&self) -> impl Iterator<Item = &Capability> {
		self.accepts.iter().filter_map(ValueKind::capability)
	}

	pub fn has_natural_language(&self) -> bool {
		self.map_key.is_some()
	}

	/// Key of the natural language map, if any.
	pub fn map_key(&self) -> Option<&str> {
		self.map_key.as_deref()
	}

	pub fn stores_unknown_in_bag(&self) -> bool {
		self.functional && self.unknown_in_bag
	}

	/// Checks that the given value is of an accepted kind.
	///
	/// Unknown values are always accepted.
	pub fn accepts_value(&self, value: &Value) -> bool {
		match value {
			Value::Entity(capability, entity) => {
				entity.is(capability)
					&& self
						.capabilities()
						.any(|accepted| accepted == capability)
			}
			Value::Iri(_) => self.accepts.contains(&ValueKind::Iri),
			Value::Primitive(p) => self.accepts.contains(&ValueKind::Primitive(p.kind())),
			Value::Unknown(_) => true,
		}
	}
}

/// Entity type declaration.
///
/// Properties and capabilities are inherited from the extended types, in
/// order. Inherited properties can be removed with [`Self::without`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TypeDefinition {
	name: Cow<'static, str>,
	parents: Vec<Cow<'static, str>>,
	properties: Vec<Cow<'static, str>>,
	removed: Vec<Cow<'static, str>>,
}

impl TypeDefinition {
	pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
		Self {
			name: name.into(),
			parents: Vec::new(),
			properties: Vec::new(),
			removed: Vec::new(),
		}
	}

	pub fn extends(
		mut self,
		parents: impl IntoIterator<Item = impl Into<Cow<'static, str>>>,
	) -> Self {
		self.parents.extend(parents.into_iter().map(Into::into));
		self
	}

	pub fn with_properties(
		mut self,
		properties: impl IntoIterator<Item = impl Into<Cow<'static, str>>>,
	) -> Self {
		self.properties.extend(properties.into_iter().map(Into::into));
		self
	}

	pub fn without(
		mut self,
		properties: impl IntoIterator<Item = impl Into<Cow<'static, str>>>,
	) -> Self {
		self.removed.extend(properties.into_iter().map(Into::into));
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn parents(&self) -> &[Cow<'static, str>] {
		&self.parents
	}

	pub fn properties(&self) -> &[Cow<'static, str>] {
		&self.properties
	}

	pub fn removed(&self) -> &[Cow<'static, str>] {
		&self.removed
	}
}

/// Resolved entity type.
///
/// Built by a [`RegistryBuilder`](crate::RegistryBuilder) from type
/// definitions, with every inherited property and capability.
#[derive(Debug)]
pub struct EntityType {
	name: String,
	capabilities: IndexSet<Capability>,
	properties: Vec<Arc<PropertyDefinition>>,
	positions: HashMap<String, usize>,
	map_positions: HashMap<String, usize>,
}

impl EntityType {
	pub(crate) fn new(
		name: String,
		capabilities: IndexSet<Capability>,
		properties: Vec<Arc<PropertyDefinition>>,
	) -> Result<Self, SchemaError> {
		let positions: HashMap<_, _> = properties
			.iter()
			.enumerate()
			.map(|(i, p)| (p.name().to_owned(), i))
			.collect();

		let mut map_positions = HashMap::new();
		for (i, p) in properties.iter().enumerate() {
			if let Some(key) = p.map_key() {
				if positions.contains_key(key) {
					return Err(SchemaError::MapKeyCollision {
						ty: name,
						property: key.to_owned(),
					});
				}

				map_positions.insert(key.to_owned(), i);
			}
		}

		Ok(Self {
			name,
			capabilities,
			properties,
			positions,
			map_positions,
		})
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Capabilities satisfied by entities of this type, starting with the
	/// type's own.
	pub fn capabilities(&self) -> impl Iterator<Item = &Capability> {
		self.capabilities.iter()
	}

	pub fn satisfies(&self, capability: &Capability) -> bool {
		self.capabilities.contains(capability)
	}

	/// Declared properties, in declaration order.
	pub fn properties(&self) -> &[Arc<PropertyDefinition>] {
		&self.properties
	}

	pub fn property(&self, name: &str) -> Option<&PropertyDefinition> {
		self.position(name).map(|i| self.properties[i].as_ref())
	}

	pub fn position(&self, name: &str) -> Option<usize> {
		self.positions.get(name).copied()
	}

	/// Position of the property whose natural language map is `key`.
	pub fn map_position(&self, key: &str) -> Option<usize> {
		self.map_positions.get(key).copied()
	}
}
