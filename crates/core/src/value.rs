use crate::{
	warning, Capability, Entity, Environment, Error, PropertyDefinition, ValueKind, Warning,
	TYPE_KEY,
};
use iref::IriBuf;
use json_ld_vocab_syntax::{AsJson, JsonKind, Primitive, PrimitiveKind, TryFromJson};

/// Property value.
///
/// A value holds exactly one of the shapes a property may accept, or the
/// raw JSON value when none of them matched.
#[derive(Clone, PartialEq, Debug)]
pub enum Value {
	/// Embedded entity, resolved for the given capability.
	Entity(Capability, Box<Entity>),

	/// Bare IRI.
	Iri(IriBuf),

	/// Primitive literal.
	Primitive(Primitive),

	/// Unrecognized value, kept verbatim.
	Unknown(serde_json::Value),
}

impl Value {
	/// Creates an embedded entity value.
	pub fn entity(capability: Capability, entity: Entity) -> Self {
		Self::Entity(capability, Box::new(entity))
	}

	pub fn unknown(value: serde_json::Value) -> Self {
		Self::Unknown(value)
	}

	/// Returns the kind of this value, or `None` for unknown values.
	pub fn kind(&self) -> Option<ValueKind> {
		match self {
			Self::Entity(c, _) => Some(ValueKind::Entity(c.clone())),
			Self::Iri(_) => Some(ValueKind::Iri),
			Self::Primitive(p) => Some(ValueKind::Primitive(p.kind())),
			Self::Unknown(_) => None,
		}
	}

	pub fn is_entity(&self) -> bool {
		matches!(self, Self::Entity(_, _))
	}

	/// Checks if this value is an embedded entity resolved for the given
	/// capability.
	///
	/// This is the capability the value was decoded or created as, not any
	/// capability the entity happens to satisfy.
	pub fn is(&self, capability: &Capability) -> bool {
		matches!(self, Self::Entity(c, _) if c == capability)
	}

	pub fn is_iri(&self) -> bool {
		matches!(self, Self::Iri(_))
	}

	pub fn is_primitive(&self, kind: PrimitiveKind) -> bool {
		matches!(self, Self::Primitive(p) if p.kind() == kind)
	}

	pub fn is_unknown(&self) -> bool {
		matches!(self, Self::Unknown(_))
	}

	pub fn capability(&self) -> Option<&Capability> {
		match self {
			Self::Entity(c, _) => Some(c),
			_ => None,
		}
	}

	pub fn as_entity(&self) -> Option<&Entity> {
		match self {
			Self::Entity(_, e) => Some(e),
			_ => None,
		}
	}

	pub fn as_entity_mut(&mut self) -> Option<&mut Entity> {
		match self {
			Self::Entity(_, e) => Some(e),
			_ => None,
		}
	}

	pub fn as_iri(&self) -> Option<&IriBuf> {
		match self {
			Self::Iri(iri) => Some(iri),
			_ => None,
		}
	}

	pub fn as_primitive(&self) -> Option<&Primitive> {
		match self {
			Self::Primitive(p) => Some(p),
			_ => None,
		}
	}

	pub fn as_unknown(&self) -> Option<&serde_json::Value> {
		match self {
			Self::Unknown(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the textual content of IRIs and string-like primitives.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Iri(iri) => Some(iri.as_str()),
			Self::Primitive(p) => p.as_str(),
			_ => None,
		}
	}

	/// Returns the IRI this value refers to: the IRI itself, or the `id`
	/// of the embedded entity.
	pub fn id(&self) -> Option<&IriBuf> {
		match self {
			Self::Iri(iri) => Some(iri),
			Self::Entity(_, e) => e.id(),
			_ => None,
		}
	}

	/// Decodes a single JSON value for the given property.
	///
	/// Arrays are not expected here; they are split by the property
	/// container beforehand, so a nested array can only be unknown.
	pub(crate) fn from_json<W: warning::Handler<Warning>>(
		value: serde_json::Value,
		property: &PropertyDefinition,
		env: &mut Environment<W>,
		depth: usize,
	) -> Result<Self, Error> {
		match value {
			serde_json::Value::Object(object) => {
				match discriminators(&object) {
					Some(types) => {
						for capability in property.capabilities() {
							let resolved = env.registry.resolve(types.as_slice(), capability);
							if let Some(mut entity) = resolved {
								if let Err(e) = entity.populate(object, env, depth + 1) {
									return Err(Error::StructuralMismatch {
										property: property.name().to_owned(),
										ty: entity.type_name().to_owned(),
										source: Box::new(e),
									});
								}

								return Ok(Self::entity(capability.clone(), entity));
							}
						}

						log::debug!(
							"no `{}` candidate matches types {:?}",
							property.name(),
							types
						);
						env.warnings.handle(Warning::UnresolvedType {
							property: property.name().to_owned(),
							types,
						})
					}
					None => env
						.warnings
						.handle(Warning::UntypedObject(property.name().to_owned())),
				}

				Ok(Self::Unknown(serde_json::Value::Object(object)))
			}
			value => {
				for kind in property.accepts() {
					match kind {
						ValueKind::Iri => {
							if let Ok(iri) = IriBuf::try_from_json(&value) {
								return Ok(Self::Iri(iri));
							}
						}
						ValueKind::Primitive(kind) => {
							if let Ok(p) = Primitive::try_from_json_as(*kind, &value) {
								return Ok(Self::Primitive(p));
							}
						}
						ValueKind::Entity(_) => (),
					}
				}

				env.warnings.handle(Warning::UnmatchedValue {
					property: property.name().to_owned(),
					found: JsonKind::of(&value),
				});

				Ok(Self::Unknown(value))
			}
		}
	}
}

/// Extracts the discriminators of a JSON object, in order.
///
/// Returns `None` if the object has no `type` entry. Non-string
/// discriminators are ignored.
pub(crate) fn discriminators(
	object: &serde_json::Map<String, serde_json::Value>,
) -> Option<Vec<String>> {
	match object.get(TYPE_KEY)? {
		serde_json::Value::String(s) => Some(vec![s.clone()]),
		serde_json::Value::Array(items) => Some(
			items
				.iter()
				.filter_map(|item| item.as_str().map(ToOwned::to_owned))
				.collect(),
		),
		_ => Some(Vec::new()),
	}
}

impl AsJson for Value {
	fn as_json(&self) -> serde_json::Value {
		match self {
			Self::Entity(_, e) => e.as_json(),
			Self::Iri(iri) => iri.as_json(),
			Self::Primitive(p) => p.as_json(),
			Self::Unknown(v) => v.clone(),
		}
	}
}

impl From<IriBuf> for Value {
	fn from(value: IriBuf) -> Self {
		Self::Iri(value)
	}
}

impl From<Primitive> for Value {
	fn from(value: Primitive) -> Self {
		Self::Primitive(value)
	}
}
