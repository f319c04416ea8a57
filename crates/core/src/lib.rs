//! Type registry and polymorphic property values for JSON-LD vocabularies.
//!
//! A vocabulary entity is a JSON object whose `type` entry names a concrete
//! entity type, and whose other entries are properties. Each property
//! accepts a list of value kinds in priority order: embedded entities
//! satisfying some [`Capability`], IRIs, or primitive literals. This crate
//! resolves every raw JSON value against those candidates, keeps whatever
//! cannot be resolved as opaque [`Value::Unknown`] data, and reproduces an
//! equivalent JSON document on the way out.
//!
//! Entity types are not hand-written: they are declared as data with
//! [`PropertyDefinition`] and [`TypeDefinition`] tables, then resolved into
//! a read-only [`Registry`] by a [`RegistryBuilder`].
pub use json_ld_vocab_syntax as syntax;

mod capability;
mod container;
mod entity;
mod error;
mod language_map;
mod options;
mod registry;
mod schema;
mod unknown;
mod value;
pub mod warning;

pub use capability::Capability;
pub use container::{Container, Functional, Values};
pub use entity::Entity;
pub use error::{Error, SchemaError};
pub use language_map::{LanguageMap, MapState};
pub use options::{FunctionalArrayPolicy, Options, DEFAULT_MAX_DEPTH};
pub use registry::{Registry, RegistryBuilder};
pub use schema::{
	EntityType, PropertyDefinition, TypeDefinition, ValueKind, CONTEXT_KEY, MAP_SUFFIX, TYPE_KEY,
};
pub use unknown::UnknownProperties;
pub use value::Value;
pub use warning::Warning;

/// Decoding environment.
pub(crate) struct Environment<'a, W> {
	pub registry: &'a Registry,
	pub options: Options,
	pub warnings: &'a mut W,
}
