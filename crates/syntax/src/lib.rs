//! Primitive value codecs for JSON-LD vocabularies.
//!
//! Vocabulary properties do not only hold embedded objects: most of them
//! also accept literal values such as IRIs, dates, durations or plain
//! strings. This crate provides one codec per literal datatype, each
//! implementing [`TryFromJson`] and [`AsJson`], plus the closed
//! [`Primitive`] sum type used by property values.
mod datetime;
mod duration;
mod error;
mod iri;
mod kind;
mod lang;
mod media_type;
mod number;
mod primitive;
mod rel;
mod try_from_json;

pub use datetime::DateTime;
pub use duration::{Duration, InvalidDuration};
pub use error::InvalidPrimitive;
pub use iref::{Iri, IriBuf};
pub use kind::JsonKind;
pub use lang::{LangString, LanguageTag};
pub use media_type::MediaType;
pub use number::{Float, NonNegativeInteger};
pub use primitive::{Primitive, PrimitiveKind};
pub use rel::LinkRelation;
pub use try_from_json::{AsJson, TryFromJson};
