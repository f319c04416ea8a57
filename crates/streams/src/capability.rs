//! Capabilities of the ActivityStreams vocabulary accepted by properties.
use json_ld_vocab_core::Capability;

pub const OBJECT: Capability = Capability::from_static("Object");
pub const LINK: Capability = Capability::from_static("Link");
pub const ACTIVITY: Capability = Capability::from_static("Activity");
pub const INTRANSITIVE_ACTIVITY: Capability = Capability::from_static("IntransitiveActivity");
pub const COLLECTION: Capability = Capability::from_static("Collection");
pub const ORDERED_COLLECTION: Capability = Capability::from_static("OrderedCollection");
pub const COLLECTION_PAGE: Capability = Capability::from_static("CollectionPage");
pub const ORDERED_COLLECTION_PAGE: Capability = Capability::from_static("OrderedCollectionPage");
pub const DOCUMENT: Capability = Capability::from_static("Document");
pub const IMAGE: Capability = Capability::from_static("Image");
pub const MENTION: Capability = Capability::from_static("Mention");
