use json_ld_vocab::{
	streams::{self, capability},
	syntax::{Duration, Primitive, PrimitiveKind},
	Error, FunctionalArrayPolicy, MapState, Options, Value, Warning,
};
use serde_json::json;
use static_iref::iri;

fn registry() -> &'static json_ld_vocab::Registry {
	streams::registry().unwrap()
}

#[test]
fn arrive_round_trip() {
	let input = json!({ "type": "Arrive", "actor": "https://ex.com/a" });
	let arrive = registry().deserialize(input.clone()).unwrap();

	assert_eq!(arrive.type_name(), "Arrive");
	assert_eq!(arrive.to_json(), input);
}

#[test]
fn idempotent_serialization() {
	let note = registry()
		.deserialize(json!({
			"type": "Note",
			"id": "https://example.com/notes/1",
			"content": ["a", "b"],
			"published": "2015-01-25T12:34:56Z",
			"x": [1, { "y": null }]
		}))
		.unwrap();

	let first = note.to_json();
	assert_eq!(note.to_json(), first);
	assert_eq!(registry().deserialize(first.clone()).unwrap().to_json(), first);
}

#[test]
fn multiplicity_collapsing() {
	let wrapped = registry()
		.deserialize_as("Arrive", json!({ "actor": ["https://ex.com/a"] }))
		.unwrap();
	let bare = registry()
		.deserialize_as("Arrive", json!({ "actor": "https://ex.com/a" }))
		.unwrap();

	let actors = wrapped.values("actor").unwrap();
	assert_eq!(actors.len(), 1);
	assert_eq!(actors, bare.values("actor").unwrap());
	assert_eq!(wrapped.to_json(), bare.to_json());
	assert_eq!(wrapped.to_json()["actor"], json!("https://ex.com/a"));
}

#[test]
fn unknown_preservation() {
	let mut warnings = Vec::new();
	let arrive = registry()
		.deserialize_with(
			json!({ "type": "Arrive", "customField": { "foo": 1 } }),
			Options::default(),
			&mut warnings,
		)
		.unwrap();

	assert!(arrive.property("customField").is_none());
	assert_eq!(arrive.unknown().get("customField"), Some(&json!({ "foo": 1 })));
	assert_eq!(arrive.to_json()["customField"], json!({ "foo": 1 }));
	assert_eq!(warnings, [Warning::UnknownKey("customField".to_owned())]);
}

#[test]
fn capability_priority() {
	let like = registry()
		.deserialize(json!({
			"type": "Like",
			"actor": { "type": "Mention", "href": "https://ex.com/alice" }
		}))
		.unwrap();

	let actor = like.first("actor").unwrap();
	assert!(actor.is(&capability::LINK));
	assert!(!actor.is(&capability::OBJECT));

	let mention = actor.as_entity().unwrap();
	assert_eq!(mention.type_name(), "Mention");
	assert!(mention.is(&capability::MENTION));
	assert_eq!(
		mention.first("href").and_then(Value::as_iri).map(|i| i.as_iri()),
		Some(iri!("https://ex.com/alice"))
	);
}

#[test]
fn discriminator_order() {
	let create = registry()
		.deserialize(json!({
			"type": "Create",
			"object": { "type": ["ex:Custom", "Image", "Note"], "name": "x" }
		}))
		.unwrap();

	let object = create.first("object").unwrap().as_entity().unwrap();
	assert_eq!(object.type_name(), "Image");
	assert_eq!(object.types(), ["ex:Custom", "Image", "Note"]);
}

#[test]
fn language_map_independence() {
	let mut note = registry().construct("Note").unwrap();
	note.language_map_mut("name").unwrap().set("en", "Hi");

	assert_eq!(
		note.to_json(),
		json!({ "type": "Note", "nameMap": { "en": "Hi" } })
	);

	let mut note = registry().construct("Note").unwrap();
	note.language_map_mut("name").unwrap().clear();
	assert_eq!(note.language_map("name").unwrap().state(), MapState::Empty);
	assert_eq!(note.to_json(), json!({ "type": "Note", "nameMap": {} }));

	let note = registry()
		.deserialize(json!({ "type": "Note", "nameMap": {} }))
		.unwrap();
	assert_eq!(note.to_json(), json!({ "type": "Note", "nameMap": {} }));
	assert!(note.language_map("name").unwrap().languages().next().is_none());
}

#[test]
fn container_ordering() {
	let mut note = registry()
		.deserialize(json!({
			"type": "Note",
			"tag": ["https://ex.com/a", "https://ex.com/b", "https://ex.com/c"]
		}))
		.unwrap();

	note.remove("tag", 1).unwrap();
	note.prepend("tag", Value::Iri(iri!("https://ex.com/d").to_owned()))
		.unwrap();

	assert_eq!(
		note.to_json()["tag"],
		json!(["https://ex.com/d", "https://ex.com/a", "https://ex.com/c"])
	);
}

#[test]
fn unknown_in_bag_properties() {
	let link = registry()
		.deserialize(json!({
			"type": "Link",
			"href": "https://ex.com/image.png",
			"height": "tall",
			"width": 640
		}))
		.unwrap();

	assert!(link.functional("height").unwrap().is_empty());
	assert_eq!(link.unknown().get("height"), Some(&json!("tall")));
	assert_eq!(
		link.first("width").and_then(Value::as_primitive).and_then(Primitive::as_u64),
		Some(640)
	);
	assert_eq!(link.to_json()["height"], json!("tall"));
}

#[test]
fn primitives() {
	let question = registry()
		.deserialize(json!({
			"type": "Question",
			"duration": "PT90M",
			"closed": ["2016-05-10T00:00:00Z", true, "https://ex.com/x"]
		}))
		.unwrap();

	let duration = question
		.first("duration")
		.and_then(Value::as_primitive)
		.and_then(Primitive::as_duration)
		.unwrap();
	assert_eq!(duration, &"PT1H30M".parse::<Duration>().unwrap());

	let closed = question.values("closed").unwrap();
	assert!(closed[0].is_primitive(PrimitiveKind::DateTime));
	assert!(closed[1].is_primitive(PrimitiveKind::Boolean));
	assert!(closed[2].is_iri());

	assert_eq!(question.to_json()["duration"], json!("PT1H30M"));
}

#[test]
fn nested_failure_is_attributed() {
	let options = Options::default().with_functional_array(FunctionalArrayPolicy::Reject);
	let error = registry()
		.deserialize_with(
			json!({
				"type": "Create",
				"object": {
					"type": "Note",
					"published": ["2015-01-25T12:34:56Z", "2016-01-25T12:34:56Z"]
				}
			}),
			options,
			&mut (),
		)
		.unwrap_err();

	assert_eq!(error.path(), ["object"]);
	assert!(matches!(error.root_cause(), Error::FunctionalArray(p) if p == "published"));
	assert!(matches!(error, Error::StructuralMismatch { ref ty, .. } if ty == "Note"));
}

#[test]
fn functional_array_preserved_by_default() {
	let input = json!({
		"type": "Note",
		"published": ["2015-01-25T12:34:56Z", "2016-01-25T12:34:56Z"]
	});
	let note = registry().deserialize(input.clone()).unwrap();

	assert!(note.first("published").unwrap().is_unknown());
	assert_eq!(note.to_json(), input);
}

#[test]
fn untyped_objects_are_not_guessed() {
	let input = json!({
		"type": "Create",
		"object": { "content": "no type here" }
	});
	let create = registry().deserialize(input.clone()).unwrap();

	assert!(create.first("object").unwrap().is_unknown());
	assert_eq!(create.to_json(), input);
}

#[test]
fn single_nested_array_round_trip() {
	let input = json!({
		"type": "Note",
		"tag": [["https://ex.com/a", "https://ex.com/b"]]
	});
	let first = registry().deserialize(input.clone()).unwrap();
	assert_eq!(first.values("tag").unwrap().len(), 1);

	let output = first.to_json();
	assert_eq!(output, input);
	assert_eq!(registry().deserialize(output).unwrap(), first);
}

#[test]
fn whole_decimal_floats_round_trip() {
	let input = json!({ "type": "Place", "latitude": 36.0, "longitude": -119 });
	let place = registry().deserialize(input.clone()).unwrap();
	assert_eq!(place.to_json(), input);
}

#[test]
fn concurrent_lookups() {
	let inputs = [
		json!({ "type": "Note", "content": "a" }),
		json!({ "type": "Arrive", "actor": "https://ex.com/a" }),
	];

	std::thread::scope(|scope| {
		let handles: Vec<_> = inputs
			.iter()
			.map(|input| {
				scope.spawn(move || {
					for _ in 0..16 {
						let entity = registry().deserialize(input.clone()).unwrap();
						assert_eq!(&entity.to_json(), input);
					}
				})
			})
			.collect();

		for handle in handles {
			handle.join().unwrap();
		}
	});
}
