//! ActivityStreams 2.0 vocabulary.
//!
//! Declares the core and extended types of the ActivityStreams vocabulary,
//! together with the actor properties of ActivityPub, as
//! [`json_ld_vocab_core`] schema tables.
//!
//! ```
//! use serde_json::json;
//!
//! let registry = json_ld_vocab_streams::registry().unwrap();
//! let arrive = registry
//! 	.deserialize(json!({ "type": "Arrive", "actor": "https://example.com/alice" }))
//! 	.unwrap();
//!
//! assert!(arrive.is(&json_ld_vocab_streams::capability::ACTIVITY));
//! assert!(arrive.first("actor").unwrap().is_iri());
//! ```
use json_ld_vocab_core::{Registry, SchemaError};
use once_cell::sync::OnceCell;

pub mod capability;
mod vocabulary;

pub use vocabulary::{builder, properties, types};

static REGISTRY: OnceCell<Registry> = OnceCell::new();

/// Returns the ActivityStreams registry, building it on first use.
pub fn registry() -> Result<&'static Registry, SchemaError> {
	REGISTRY.get_or_try_init(|| {
		let registry = builder()?.build()?;
		log::debug!("ActivityStreams registry ready");
		Ok(registry)
	})
}
