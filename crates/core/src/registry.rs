use crate::{
	value::discriminators, warning, Capability, Entity, EntityType, Environment, Error, Options,
	PropertyDefinition, SchemaError, TypeDefinition, Warning,
};
use indexmap::{IndexMap, IndexSet};
use json_ld_vocab_syntax::JsonKind;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Type registry.
///
/// Maps discriminators to entity types. A registry is built once by a
/// [`RegistryBuilder`] and is read-only afterward.
#[derive(Debug, Clone, Default)]
pub struct Registry {
	types: IndexMap<String, Arc<EntityType>>,
}

impl Registry {
	pub fn builder() -> RegistryBuilder {
		RegistryBuilder::default()
	}

	pub fn len(&self) -> usize {
		self.types.len()
	}

	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}

	pub fn get(&self, name: &str) -> Option<&Arc<EntityType>> {
		self.types.get(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.types.contains_key(name)
	}

	/// Iterates over the entity types, in definition order.
	pub fn types(&self) -> impl Iterator<Item = &Arc<EntityType>> {
		self.types.values()
	}

	/// Iterates over the entity types satisfying the given capability.
	pub fn with_capability<'a>(
		&'a self,
		capability: &'a Capability,
	) -> impl 'a + Iterator<Item = &'a Arc<EntityType>> {
		self.types().filter(move |ty| ty.satisfies(capability))
	}

	/// Creates an empty entity of the given type.
	pub fn construct(&self, name: &str) -> Option<Entity> {
		self.get(name).cloned().map(Entity::new)
	}

	/// Creates an empty entity for the first discriminator naming a type
	/// that satisfies the given capability.
	pub fn resolve<S: AsRef<str>>(
		&self,
		discriminators: &[S],
		capability: &Capability,
	) -> Option<Entity> {
		discriminators.iter().find_map(|d| {
			self.get(d.as_ref())
				.filter(|ty| ty.satisfies(capability))
				.cloned()
				.map(Entity::new)
		})
	}

	/// Creates an empty entity for the first discriminator naming a type.
	pub fn resolve_any<S: AsRef<str>>(&self, discriminators: &[S]) -> Option<Entity> {
		discriminators.iter().find_map(|d| self.construct(d.as_ref()))
	}

	/// Deserializes a top-level entity with the default options, ignoring
	/// warnings.
	pub fn deserialize(&self, value: serde_json::Value) -> Result<Entity, Error> {
		self.deserialize_with(value, Options::default(), &mut ())
	}

	/// Deserializes a top-level entity.
	///
	/// The value must be a JSON object whose `type` entry names a type of
	/// this registry.
	pub fn deserialize_with<W: warning::Handler<Warning>>(
		&self,
		value: serde_json::Value,
		options: Options,
		warnings: &mut W,
	) -> Result<Entity, Error> {
		let object = match value {
			serde_json::Value::Object(object) => object,
			other => return Err(Error::NotAnObject(JsonKind::of(&other))),
		};

		let types = discriminators(&object).ok_or(Error::MissingType)?;
		let mut entity = self
			.resolve_any(types.as_slice())
			.ok_or_else(|| Error::UnknownType(types))?;

		log::debug!("deserializing `{}` entity", entity.type_name());
		let mut env = Environment {
			registry: self,
			options,
			warnings,
		};
		entity.populate(object, &mut env, 0)?;
		Ok(entity)
	}

	/// Deserializes a top-level entity of the given type, whatever its
	/// `type` entry says.
	pub fn deserialize_as(&self, name: &str, value: serde_json::Value) -> Result<Entity, Error> {
		self.deserialize_as_with(name, value, Options::default(), &mut ())
	}

	pub fn deserialize_as_with<W: warning::Handler<Warning>>(
		&self,
		name: &str,
		value: serde_json::Value,
		options: Options,
		warnings: &mut W,
	) -> Result<Entity, Error> {
		let mut entity = self
			.construct(name)
			.ok_or_else(|| Error::UndefinedType(name.to_owned()))?;

		match value {
			serde_json::Value::Object(object) => {
				let mut env = Environment {
					registry: self,
					options,
					warnings,
				};
				entity.populate(object, &mut env, 0)?;
				Ok(entity)
			}
			other => Err(Error::NotAnObject(JsonKind::of(&other))),
		}
	}

	/// Parses and deserializes a top-level entity.
	pub fn deserialize_str(&self, json: &str) -> Result<Entity, Error> {
		self.deserialize(serde_json::from_str(json)?)
	}
}

/// Inherited capabilities and property names of a type.
struct Lineage {
	capabilities: IndexSet<Capability>,
	properties: IndexSet<String>,
}

/// Registry builder.
#[derive(Debug, Default, Clone)]
pub struct RegistryBuilder {
	properties: IndexMap<String, Arc<PropertyDefinition>>,
	types: IndexMap<String, TypeDefinition>,
}

impl RegistryBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn define_property(
		&mut self,
		definition: PropertyDefinition,
	) -> Result<&mut Self, SchemaError> {
		let name = definition.name().to_owned();
		if self.properties.contains_key(&name) {
			return Err(SchemaError::DuplicateProperty(name));
		}

		self.properties.insert(name, Arc::new(definition));
		Ok(self)
	}

	pub fn define_type(&mut self, definition: TypeDefinition) -> Result<&mut Self, SchemaError> {
		let name = definition.name().to_owned();
		if self.types.contains_key(&name) {
			return Err(SchemaError::DuplicateType(name));
		}

		self.types.insert(name, definition);
		Ok(self)
	}

	fn resolve_lineage(
		&self,
		definition: &TypeDefinition,
		resolved: &mut HashMap<String, Lineage>,
		pending: &mut HashSet<String>,
	) -> Result<(), SchemaError> {
		let name = definition.name();
		if resolved.contains_key(name) {
			return Ok(());
		}

		if !pending.insert(name.to_owned()) {
			return Err(SchemaError::CyclicInheritance(name.to_owned()));
		}

		let mut capabilities = IndexSet::new();
		capabilities.insert(Capability::new(name.to_owned()));
		let mut properties = IndexSet::new();

		for parent in definition.parents() {
			let parent: &str = parent;
			let parent_definition =
				self.types
					.get(parent)
					.ok_or_else(|| SchemaError::UndefinedParent {
						ty: name.to_owned(),
						parent: parent.to_owned(),
					})?;

			self.resolve_lineage(parent_definition, resolved, pending)?;
			if let Some(lineage) = resolved.get(parent) {
				capabilities.extend(lineage.capabilities.iter().cloned());
				properties.extend(lineage.properties.iter().cloned());
			}
		}

		properties.extend(definition.properties().iter().map(|p| p.to_string()));
		for removed in definition.removed() {
			let removed: &str = removed;
			properties.shift_remove(removed);
		}

		pending.remove(name);
		resolved.insert(
			name.to_owned(),
			Lineage {
				capabilities,
				properties,
			},
		);

		Ok(())
	}

	/// Resolves every type definition.
	pub fn build(&self) -> Result<Registry, SchemaError> {
		let mut resolved = HashMap::new();
		let mut pending = HashSet::new();
		for definition in self.types.values() {
			self.resolve_lineage(definition, &mut resolved, &mut pending)?;
		}

		let mut types = IndexMap::with_capacity(self.types.len());
		for name in self.types.keys() {
			let Some(lineage) = resolved.remove(name) else {
				continue;
			};

			let properties = lineage
				.properties
				.into_iter()
				.map(|property| match self.properties.get(&property) {
					Some(definition) => Ok(definition.clone()),
					None => Err(SchemaError::UndefinedProperty {
						ty: name.clone(),
						property,
					}),
				})
				.collect::<Result<Vec<_>, _>>()?;

			let ty = EntityType::new(name.clone(), lineage.capabilities, properties)?;
			types.insert(name.clone(), Arc::new(ty));
		}

		log::debug!("built registry of {} entity types", types.len());
		Ok(Registry { types })
	}
}
