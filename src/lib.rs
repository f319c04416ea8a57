//! Strongly typed values for JSON-LD vocabularies.
//!
//! In vocabularies such as
//! [ActivityStreams 2.0](https://www.w3.org/TR/activitystreams-core/),
//! every property may hold several structurally distinct kinds of values:
//! embedded typed objects, links, bare IRIs, literals or language-tagged
//! strings. This crate decodes each raw JSON value against the ordered list
//! of kinds accepted by its property, keeps whatever it does not understand
//! as opaque data, and encodes entities back into equivalent JSON documents.
//!
//! ```
//! use serde_json::json;
//!
//! let registry = json_ld_vocab::streams::registry().unwrap();
//! let input = json!({
//! 	"@context": "https://www.w3.org/ns/activitystreams",
//! 	"type": "Note",
//! 	"name": "Hello",
//! 	"nameMap": { "fr": "Bonjour" },
//! 	"customField": { "foo": 1 }
//! });
//!
//! let note = registry.deserialize(input).unwrap();
//! assert_eq!(note.language_map("name").unwrap().get("fr"), "Bonjour");
//! assert!(note.unknown().contains("customField"));
//!
//! let output = note.to_json();
//! assert_eq!(output["customField"], json!({ "foo": 1 }));
//! assert!(output.get("@context").is_none());
//! ```
pub use json_ld_vocab_core::*;

#[cfg(feature = "streams")]
pub use json_ld_vocab_streams as streams;
