use crate::capability::{
	COLLECTION, COLLECTION_PAGE, IMAGE, LINK, OBJECT, ORDERED_COLLECTION, ORDERED_COLLECTION_PAGE,
};
use json_ld_vocab_core::{
	PropertyDefinition, RegistryBuilder, SchemaError, TypeDefinition, ValueKind,
};
use json_ld_vocab_syntax::PrimitiveKind as K;

/// Properties whose values are objects or links.
const OBJECT_OR_LINK: &[&str] = &[
	"attachment",
	"attributedTo",
	"audience",
	"bcc",
	"bto",
	"cc",
	"context",
	"generator",
	"inReplyTo",
	"location",
	"preview",
	"tag",
	"to",
	"actor",
	"object",
	"target",
	"result",
	"origin",
	"instrument",
	"items",
	"orderedItems",
	"oneOf",
	"anyOf",
];

const OBJECT_PROPERTIES: &[&str] = &[
	"id",
	"type",
	"attachment",
	"attributedTo",
	"audience",
	"bcc",
	"bto",
	"cc",
	"content",
	"context",
	"duration",
	"endTime",
	"generator",
	"icon",
	"image",
	"inReplyTo",
	"location",
	"mediaType",
	"name",
	"preview",
	"published",
	"replies",
	"startTime",
	"summary",
	"tag",
	"to",
	"updated",
	"url",
	"likes",
	"shares",
	"source",
];

const LINK_PROPERTIES: &[&str] = &[
	"id",
	"type",
	"href",
	"rel",
	"mediaType",
	"name",
	"hreflang",
	"height",
	"width",
	"preview",
];

/// ActivityPub actor properties.
const ACTOR_PROPERTIES: &[&str] = &[
	"inbox",
	"outbox",
	"followers",
	"following",
	"liked",
	"streams",
	"preferredUsername",
];

const ACTIVITIES: &[(&str, &str)] = &[
	("Accept", "Activity"),
	("Add", "Activity"),
	("Announce", "Activity"),
	("Create", "Activity"),
	("Delete", "Activity"),
	("Dislike", "Activity"),
	("Flag", "Activity"),
	("Follow", "Activity"),
	("Ignore", "Activity"),
	("Join", "Activity"),
	("Leave", "Activity"),
	("Like", "Activity"),
	("Listen", "Activity"),
	("Move", "Activity"),
	("Offer", "Activity"),
	("Read", "Activity"),
	("Reject", "Activity"),
	("Remove", "Activity"),
	("Undo", "Activity"),
	("Update", "Activity"),
	("View", "Activity"),
	("Block", "Ignore"),
	("Invite", "Offer"),
	("TentativeAccept", "Accept"),
	("TentativeReject", "Reject"),
	("Arrive", "IntransitiveActivity"),
	("Travel", "IntransitiveActivity"),
];

const ACTORS: &[&str] = &["Application", "Group", "Organization", "Person", "Service"];

fn object_or_link() -> Vec<ValueKind> {
	vec![OBJECT.into(), LINK.into(), ValueKind::Iri]
}

fn page_or_link() -> Vec<ValueKind> {
	vec![COLLECTION_PAGE.into(), LINK.into(), ValueKind::Iri]
}

fn actor_collection() -> Vec<ValueKind> {
	vec![ORDERED_COLLECTION.into(), COLLECTION.into(), ValueKind::Iri]
}

fn natural_language() -> Vec<ValueKind> {
	vec![K::String.into(), K::LangString.into()]
}

/// Property declarations.
pub fn properties() -> Vec<PropertyDefinition> {
	use PropertyDefinition as P;

	let mut properties = vec![
		P::functional("id", [ValueKind::Iri]),
		P::non_functional("type", [ValueKind::Iri, K::String.into()]),
		P::non_functional("content", natural_language()).with_natural_language(),
		P::non_functional("name", natural_language()).with_natural_language(),
		P::non_functional("summary", natural_language()).with_natural_language(),
		P::functional("duration", [K::Duration.into()]),
		P::functional("endTime", [K::DateTime.into()]),
		P::functional("published", [K::DateTime.into()]),
		P::functional("startTime", [K::DateTime.into()]),
		P::functional("updated", [K::DateTime.into()]),
		P::functional("deleted", [K::DateTime.into()]),
		P::non_functional("icon", [IMAGE.into(), LINK.into(), ValueKind::Iri]),
		P::non_functional("image", [IMAGE.into(), LINK.into(), ValueKind::Iri]),
		P::functional("replies", [COLLECTION.into(), ValueKind::Iri]),
		P::non_functional("url", [LINK.into(), ValueKind::Iri]),
		P::functional("mediaType", [K::MediaType.into()]).with_unknown_in_bag(),
		P::functional("href", [ValueKind::Iri]),
		P::functional("hreflang", [K::LanguageTag.into()]).with_unknown_in_bag(),
		P::non_functional("rel", [K::LinkRelation.into()]),
		P::functional("height", [K::NonNegativeInteger.into()]).with_unknown_in_bag(),
		P::functional("width", [K::NonNegativeInteger.into()]).with_unknown_in_bag(),
		P::non_functional(
			"closed",
			[
				OBJECT.into(),
				LINK.into(),
				K::DateTime.into(),
				K::Boolean.into(),
				ValueKind::Iri,
			],
		),
		P::functional("totalItems", [K::NonNegativeInteger.into()]),
		P::functional("startIndex", [K::NonNegativeInteger.into()]),
		P::functional("current", page_or_link()),
		P::functional("first", page_or_link()),
		P::functional("last", page_or_link()),
		P::functional("next", page_or_link()),
		P::functional("prev", page_or_link()),
		P::functional("partOf", [COLLECTION.into(), LINK.into(), ValueKind::Iri]),
		P::functional("accuracy", [K::Float.into()]),
		P::functional("altitude", [K::Float.into()]),
		P::functional("latitude", [K::Float.into()]),
		P::functional("longitude", [K::Float.into()]),
		P::functional("radius", [K::Float.into()]),
		P::functional("units", [K::String.into(), ValueKind::Iri]),
		P::functional("describes", [OBJECT.into()]),
		P::functional("subject", object_or_link()),
		P::non_functional("relationship", [OBJECT.into(), ValueKind::Iri]),
		P::non_functional("formerType", [OBJECT.into(), K::String.into()]),
		P::functional("likes", [COLLECTION.into(), ValueKind::Iri]),
		P::functional("shares", [COLLECTION.into(), ValueKind::Iri]),
		P::functional("source", [OBJECT.into()]),
		P::functional(
			"inbox",
			[
				ORDERED_COLLECTION.into(),
				ORDERED_COLLECTION_PAGE.into(),
				ValueKind::Iri,
			],
		),
		P::functional(
			"outbox",
			[
				ORDERED_COLLECTION.into(),
				ORDERED_COLLECTION_PAGE.into(),
				ValueKind::Iri,
			],
		),
		P::functional("followers", actor_collection()),
		P::functional("following", actor_collection()),
		P::functional("liked", actor_collection()),
		P::non_functional("streams", [COLLECTION.into(), ValueKind::Iri]),
		P::functional("preferredUsername", natural_language()).with_natural_language(),
	];

	properties.extend(
		OBJECT_OR_LINK
			.iter()
			.map(|name| P::non_functional(*name, object_or_link())),
	);

	properties
}

/// Entity type declarations.
pub fn types() -> Vec<TypeDefinition> {
	let mut types = vec![
		TypeDefinition::new("Object").with_properties(OBJECT_PROPERTIES.iter().copied()),
		TypeDefinition::new("Link").with_properties(LINK_PROPERTIES.iter().copied()),
		TypeDefinition::new("Mention").extends(["Link"]),
		TypeDefinition::new("Activity").extends(["Object"]).with_properties([
			"actor",
			"object",
			"target",
			"result",
			"origin",
			"instrument",
		]),
		TypeDefinition::new("IntransitiveActivity")
			.extends(["Activity"])
			.without(["object"]),
		TypeDefinition::new("Question")
			.extends(["IntransitiveActivity"])
			.with_properties(["oneOf", "anyOf", "closed"]),
		TypeDefinition::new("Collection").extends(["Object"]).with_properties([
			"totalItems",
			"current",
			"first",
			"last",
			"items",
		]),
		TypeDefinition::new("OrderedCollection")
			.extends(["Collection"])
			.with_properties(["orderedItems"])
			.without(["items"]),
		TypeDefinition::new("CollectionPage")
			.extends(["Collection"])
			.with_properties(["partOf", "next", "prev"]),
		TypeDefinition::new("OrderedCollectionPage")
			.extends(["OrderedCollection", "CollectionPage"])
			.with_properties(["startIndex"])
			.without(["items"]),
		TypeDefinition::new("Article").extends(["Object"]),
		TypeDefinition::new("Document").extends(["Object"]),
		TypeDefinition::new("Audio").extends(["Document"]),
		TypeDefinition::new("Image").extends(["Document"]),
		TypeDefinition::new("Page").extends(["Document"]),
		TypeDefinition::new("Video").extends(["Document"]),
		TypeDefinition::new("Event").extends(["Object"]),
		TypeDefinition::new("Note").extends(["Object"]),
		TypeDefinition::new("Place").extends(["Object"]).with_properties([
			"accuracy",
			"altitude",
			"latitude",
			"longitude",
			"radius",
			"units",
		]),
		TypeDefinition::new("Profile")
			.extends(["Object"])
			.with_properties(["describes"]),
		TypeDefinition::new("Relationship")
			.extends(["Object"])
			.with_properties(["subject", "object", "relationship"]),
		TypeDefinition::new("Tombstone")
			.extends(["Object"])
			.with_properties(["formerType", "deleted"]),
	];

	types.extend(
		ACTIVITIES
			.iter()
			.map(|(name, parent)| TypeDefinition::new(*name).extends([*parent])),
	);

	types.extend(ACTORS.iter().map(|name| {
		TypeDefinition::new(*name)
			.extends(["Object"])
			.with_properties(ACTOR_PROPERTIES.iter().copied())
	}));

	types
}

/// Creates a registry builder with every ActivityStreams definition.
///
/// Extension vocabularies can add their own definitions before building.
pub fn builder() -> Result<RegistryBuilder, SchemaError> {
	let mut builder = RegistryBuilder::new();

	for property in properties() {
		builder.define_property(property)?;
	}

	for ty in types() {
		builder.define_type(ty)?;
	}

	Ok(builder)
}
