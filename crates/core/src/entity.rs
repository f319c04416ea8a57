use crate::{
	warning, Capability, Container, EntityType, Environment, Error, Functional, LanguageMap,
	PropertyDefinition, UnknownProperties, Value, Values, Warning, CONTEXT_KEY, TYPE_KEY,
};
use iref::IriBuf;
use json_ld_vocab_syntax::AsJson;
use std::sync::Arc;

#[derive(Clone, PartialEq, Debug)]
struct Slot {
	container: Container,
	language_map: Option<LanguageMap>,
}

impl Slot {
	fn new(property: &PropertyDefinition) -> Self {
		Self {
			container: Container::new(property),
			language_map: property.has_natural_language().then(LanguageMap::new),
		}
	}
}

/// Vocabulary entity.
///
/// One slot per property declared by the entity type, each with its own
/// container and natural language map, plus the unknown properties.
#[derive(Clone, Debug)]
pub struct Entity {
	ty: Arc<EntityType>,
	slots: Vec<Slot>,
	unknown: UnknownProperties,
}

impl Entity {
	/// Creates an entity of the given type with no properties.
	pub fn new(ty: Arc<EntityType>) -> Self {
		let slots = ty.properties().iter().map(|p| Slot::new(p)).collect();
		Self {
			ty,
			slots,
			unknown: UnknownProperties::new(),
		}
	}

	pub fn entity_type(&self) -> &Arc<EntityType> {
		&self.ty
	}

	pub fn type_name(&self) -> &str {
		self.ty.name()
	}

	/// Checks that this entity satisfies the given capability.
	pub fn is(&self, capability: &Capability) -> bool {
		self.ty.satisfies(capability)
	}

	/// Returns the discriminators of this entity.
	///
	/// These are the string values of the `type` property, or the entity
	/// type name if there are none.
	pub fn types(&self) -> Vec<&str> {
		let types: Vec<&str> = self
			.property(TYPE_KEY)
			.into_iter()
			.flat_map(Container::iter)
			.filter_map(Value::as_str)
			.collect();

		if types.is_empty() {
			vec![self.type_name()]
		} else {
			types
		}
	}

	/// Returns the `id` of this entity, if it is an IRI.
	pub fn id(&self) -> Option<&IriBuf> {
		self.first("id").and_then(Value::as_iri)
	}

	fn slot(&self, name: &str) -> Option<&Slot> {
		self.ty.position(name).map(|i| &self.slots[i])
	}

	fn slot_mut(&mut self, name: &str) -> Option<&mut Slot> {
		self.ty.position(name).map(|i| &mut self.slots[i])
	}

	/// Returns the container of the given declared property.
	pub fn property(&self, name: &str) -> Option<&Container> {
		self.slot(name).map(|s| &s.container)
	}

	/// Returns the container of the given declared property.
	///
	/// Values written through this container are not checked against the
	/// accepted kinds of the property.
	pub fn property_mut(&mut self, name: &str) -> Option<&mut Container> {
		self.slot_mut(name).map(|s| &mut s.container)
	}

	/// Returns the values of a non-functional property.
	pub fn values(&self, name: &str) -> Option<&Values> {
		self.property(name).and_then(Container::as_values)
	}

	pub fn values_mut(&mut self, name: &str) -> Option<&mut Values> {
		self.property_mut(name).and_then(Container::as_values_mut)
	}

	/// Returns the value of a functional property.
	pub fn functional(&self, name: &str) -> Option<&Functional> {
		self.property(name).and_then(Container::as_functional)
	}

	pub fn functional_mut(&mut self, name: &str) -> Option<&mut Functional> {
		self.property_mut(name).and_then(Container::as_functional_mut)
	}

	/// Returns the first value of the given property.
	pub fn first(&self, name: &str) -> Option<&Value> {
		self.property(name).and_then(Container::first)
	}

	/// Returns the natural language map of the given property.
	///
	/// `name` is the property name, not the `<name>Map` key.
	pub fn language_map(&self, name: &str) -> Option<&LanguageMap> {
		self.slot(name).and_then(|s| s.language_map.as_ref())
	}

	pub fn language_map_mut(&mut self, name: &str) -> Option<&mut LanguageMap> {
		self.slot_mut(name).and_then(|s| s.language_map.as_mut())
	}

	pub fn unknown(&self) -> &UnknownProperties {
		&self.unknown
	}

	pub fn unknown_mut(&mut self) -> &mut UnknownProperties {
		&mut self.unknown
	}

	/// Iterates over the declared properties and their containers, in
	/// declaration order.
	pub fn properties(&self) -> impl Iterator<Item = (&PropertyDefinition, &Container)> {
		self.ty
			.properties()
			.iter()
			.zip(&self.slots)
			.map(|(p, s)| (p.as_ref(), &s.container))
	}

	fn checked_slot(&mut self, name: &str, value: Option<&Value>) -> Result<&mut Slot, Error> {
		let i = self
			.ty
			.position(name)
			.ok_or_else(|| Error::UndeclaredProperty(name.to_owned()))?;

		if let Some(value) = value {
			let property = &self.ty.properties()[i];
			if !property.accepts_value(value) {
				return Err(Error::UnacceptedValue {
					property: name.to_owned(),
					found: describe(value),
				});
			}
		}

		Ok(&mut self.slots[i])
	}

	fn checked_values(&mut self, name: &str, value: Option<&Value>) -> Result<&mut Values, Error> {
		self.checked_slot(name, value)?
			.container
			.as_values_mut()
			.ok_or_else(|| Error::Functional(name.to_owned()))
	}

	/// Appends a value to a non-functional property.
	pub fn append(&mut self, name: &str, value: Value) -> Result<(), Error> {
		self.checked_values(name, Some(&value))?.append(value);
		Ok(())
	}

	/// Prepends a value to a non-functional property, shifting the others.
	pub fn prepend(&mut self, name: &str, value: Value) -> Result<(), Error> {
		self.checked_values(name, Some(&value))?.prepend(value);
		Ok(())
	}

	/// Sets the value of a functional property, returning the previous one.
	pub fn set(&mut self, name: &str, value: Value) -> Result<Option<Value>, Error> {
		let f = self
			.checked_slot(name, Some(&value))?
			.container
			.as_functional_mut()
			.ok_or_else(|| Error::NotFunctional(name.to_owned()))?;
		Ok(f.set(value))
	}

	/// Removes the value at the given position of a non-functional property.
	///
	/// # Panics
	///
	/// Panics if `index` is out of bounds.
	pub fn remove(&mut self, name: &str, index: usize) -> Result<Value, Error> {
		Ok(self.checked_values(name, None)?.remove(index))
	}

	/// Removes every value of the given property.
	///
	/// The natural language map of the property is left untouched.
	pub fn clear(&mut self, name: &str) -> Result<(), Error> {
		self.checked_slot(name, None)?.container.clear();
		Ok(())
	}

	/// Populates this entity with the entries of the given JSON object.
	///
	/// `depth` is the nesting depth of the object, `0` for the top-level
	/// entity.
	pub(crate) fn populate<W: warning::Handler<Warning>>(
		&mut self,
		object: serde_json::Map<String, serde_json::Value>,
		env: &mut Environment<W>,
		depth: usize,
	) -> Result<(), Error> {
		if let Some(limit) = env.options.max_depth {
			if depth > limit {
				return Err(Error::DepthLimitExceeded(limit));
			}
		}

		let ty = self.ty.clone();
		for (key, value) in object {
			if key == CONTEXT_KEY {
				log::trace!("dropping `{CONTEXT_KEY}` of `{}` entity", ty.name());
				continue;
			}

			if let Some(i) = ty.position(&key) {
				let property = &ty.properties()[i];
				let container = if property.is_functional() {
					let f = Functional::from_json(value, property, env, depth)?;
					match f.into_inner() {
						Some(Value::Unknown(raw)) if property.stores_unknown_in_bag() => {
							self.unknown.insert(key, raw);
							continue;
						}
						value => Container::Functional(value.into()),
					}
				} else {
					Container::NonFunctional(Values::from_json(value, property, env, depth)?)
				};

				self.slots[i].container = container;
			} else if let Some(i) = ty.map_position(&key) {
				match LanguageMap::from_json(value) {
					Ok(map) => self.slots[i].language_map = Some(map),
					Err(raw) => {
						env.warnings.handle(Warning::InvalidLanguageMap(key.clone()));
						self.unknown.insert(key, raw);
					}
				}
			} else {
				if key != TYPE_KEY {
					env.warnings.handle(Warning::UnknownKey(key.clone()));
				}

				self.unknown.insert(key, value);
			}
		}

		Ok(())
	}

	fn is_typed(&self) -> bool {
		self.property(TYPE_KEY).is_some_and(|c| !c.is_empty()) || self.unknown.contains(TYPE_KEY)
	}

	/// Encodes this entity.
	///
	/// Unknown properties come first, followed by the declared properties in
	/// declaration order, each followed by its natural language map. A
	/// declared property overrides an unknown property of the same name.
	pub fn to_json(&self) -> serde_json::Value {
		let mut object = serde_json::Map::new();

		if !self.is_typed() {
			object.insert(
				TYPE_KEY.to_owned(),
				serde_json::Value::String(self.type_name().to_owned()),
			);
		}

		for (key, value) in self.unknown.iter() {
			object.insert(key.to_owned(), value.clone());
		}

		for (property, slot) in self.ty.properties().iter().zip(&self.slots) {
			if let Some(value) = slot.container.as_json() {
				object.insert(property.name().to_owned(), value);
			}

			if let (Some(key), Some(map)) = (property.map_key(), &slot.language_map) {
				if let Some(value) = map.as_json() {
					object.insert(key.to_owned(), value);
				}
			}
		}

		serde_json::Value::Object(object)
	}
}

fn describe(value: &Value) -> String {
	match value {
		Value::Entity(capability, entity) => {
			format!("`{}` entity as {capability}", entity.type_name())
		}
		other => match other.kind() {
			Some(kind) => kind.to_string(),
			None => "unknown value".to_owned(),
		},
	}
}

impl PartialEq for Entity {
	fn eq(&self, other: &Self) -> bool {
		self.ty.name() == other.ty.name()
			&& self.slots == other.slots
			&& self.unknown == other.unknown
	}
}

impl AsJson for Entity {
	fn as_json(&self) -> serde_json::Value {
		self.to_json()
	}
}

#[cfg(feature = "serde")]
impl serde::Serialize for Entity {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serde::Serialize::serialize(&self.to_json(), serializer)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Options, Registry, TypeDefinition, ValueKind};
	use json_ld_vocab_syntax::{Primitive, PrimitiveKind};
	use serde_json::json;
	use static_iref::iri;

	fn registry() -> Registry {
		let mut builder = Registry::builder();
		for property in [
			PropertyDefinition::functional("id", [ValueKind::Iri]),
			PropertyDefinition::non_functional(
				"type",
				[ValueKind::Iri, PrimitiveKind::String.into()],
			),
			PropertyDefinition::non_functional(
				"name",
				[PrimitiveKind::String.into(), PrimitiveKind::LangString.into()],
			)
			.with_natural_language(),
			PropertyDefinition::functional("width", [PrimitiveKind::NonNegativeInteger.into()])
				.with_unknown_in_bag(),
			PropertyDefinition::non_functional(
				"attachment",
				[Capability::new("Note").into(), ValueKind::Iri],
			),
		] {
			builder.define_property(property).unwrap();
		}

		builder
			.define_type(TypeDefinition::new("Note").with_properties([
				"id",
				"type",
				"name",
				"width",
				"attachment",
			]))
			.unwrap();
		builder.build().unwrap()
	}

	#[test]
	fn decode_declared_and_unknown() {
		let registry = registry();
		let mut warnings = Vec::new();
		let entity = registry
			.deserialize_with(
				json!({
					"@context": "https://www.w3.org/ns/activitystreams",
					"type": "Note",
					"id": "https://example.com/n/1",
					"name": ["a", "b"],
					"nameMap": { "en": "a" },
					"customField": { "foo": 1 }
				}),
				Options::default(),
				&mut warnings,
			)
			.unwrap();

		assert_eq!(entity.id().map(IriBuf::as_iri), Some(iri!("https://example.com/n/1")));
		assert_eq!(entity.values("name").unwrap().len(), 2);
		assert_eq!(entity.language_map("name").unwrap().get("en"), "a");
		assert_eq!(entity.unknown().get("customField"), Some(&json!({ "foo": 1 })));
		assert!(!entity.unknown().contains("@context"));
		assert_eq!(warnings, [Warning::UnknownKey("customField".to_owned())]);
	}

	#[test]
	fn unknown_in_bag() {
		let entity = registry()
			.deserialize(json!({ "type": "Note", "width": "wide" }))
			.unwrap();

		assert!(entity.functional("width").unwrap().is_empty());
		assert_eq!(entity.unknown().get("width"), Some(&json!("wide")));
		assert_eq!(entity.to_json(), json!({ "type": "Note", "width": "wide" }));
	}

	#[test]
	fn declared_overrides_unknown() {
		let mut entity = registry()
			.deserialize(json!({ "type": "Note", "width": "wide" }))
			.unwrap();

		entity
			.set("width", Primitive::NonNegativeInteger(12u64.into()).into())
			.unwrap();
		assert_eq!(entity.to_json()["width"], json!(12));
	}

	#[test]
	fn default_type() {
		let registry = registry();
		let mut entity = registry.construct("Note").unwrap();
		entity
			.language_map_mut("name")
			.unwrap()
			.set("en", "Hi");

		assert_eq!(entity.types(), ["Note"]);
		assert_eq!(
			entity.to_json(),
			json!({ "type": "Note", "nameMap": { "en": "Hi" } })
		);
	}

	#[test]
	fn nested_entity() {
		let entity = registry()
			.deserialize(json!({
				"type": "Note",
				"attachment": [
					{ "type": "Note", "name": "inner" },
					"https://example.com/n/2",
					{ "name": "untyped" }
				]
			}))
			.unwrap();

		let values = entity.values("attachment").unwrap();
		assert!(values[0].is(&Capability::new("Note")));
		assert_eq!(
			values[0].as_entity().unwrap().first("name").and_then(Value::as_str),
			Some("inner")
		);
		assert!(values[1].is_iri());
		assert!(values[2].is_unknown());
	}

	#[test]
	fn checked_mutation() {
		let registry = registry();
		let mut entity = registry.construct("Note").unwrap();

		assert!(matches!(
			entity.append("undeclared", Value::unknown(json!(1))),
			Err(Error::UndeclaredProperty(_))
		));
		assert!(matches!(
			entity.append("id", Value::unknown(json!(1))),
			Err(Error::Functional(_))
		));
		assert!(matches!(
			entity.set("name", Value::unknown(json!(1))),
			Err(Error::NotFunctional(_))
		));
		assert!(matches!(
			entity.set("id", Primitive::from("x").into()),
			Err(Error::UnacceptedValue { .. })
		));

		entity
			.set("id", Value::Iri(iri!("https://example.com/n/3").to_owned()))
			.unwrap();
		assert_eq!(entity.id().map(IriBuf::as_str), Some("https://example.com/n/3"));

		entity.append("name", Primitive::from("a").into()).unwrap();
		entity.append("name", Primitive::from("b").into()).unwrap();
		entity.append("name", Primitive::from("c").into()).unwrap();
		entity.remove("name", 1).unwrap();
		entity.prepend("name", Primitive::from("d").into()).unwrap();
		assert_eq!(entity.to_json()["name"], json!(["d", "a", "c"]));

		entity.clear("name").unwrap();
		assert!(entity.to_json().get("name").is_none());
	}

	#[test]
	fn invalid_language_map() {
		let mut warnings = Vec::new();
		let entity = registry()
			.deserialize_with(
				json!({ "type": "Note", "nameMap": ["en"] }),
				Options::default(),
				&mut warnings,
			)
			.unwrap();

		assert!(!entity.language_map("name").unwrap().is_present());
		assert_eq!(entity.unknown().get("nameMap"), Some(&json!(["en"])));
		assert_eq!(warnings, [Warning::InvalidLanguageMap("nameMap".to_owned())]);
	}
}
