use indexmap::IndexMap;

/// Presence of a language map, or of the unknown property bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapState {
	/// Never decoded nor written: omitted on output.
	Untouched,

	/// Present but empty: emitted as `{}`.
	Empty,

	Populated,
}

/// Language-tagged alternatives of a natural language property.
///
/// Serialized as the `<property>Map` sibling entry of the property. Keys
/// are kept in insertion order and are not validated as language tags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LanguageMap(Option<IndexMap<String, String>>);

impl LanguageMap {
	/// Creates an untouched language map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a present but empty language map.
	pub fn empty() -> Self {
		Self(Some(IndexMap::new()))
	}

	pub fn state(&self) -> MapState {
		match &self.0 {
			None => MapState::Untouched,
			Some(map) if map.is_empty() => MapState::Empty,
			Some(_) => MapState::Populated,
		}
	}

	pub fn is_present(&self) -> bool {
		self.0.is_some()
	}

	pub fn len(&self) -> usize {
		self.0.as_ref().map(IndexMap::len).unwrap_or_default()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn languages(&self) -> impl Iterator<Item = &str> {
		self.0.iter().flat_map(|map| map.keys().map(String::as_str))
	}

	pub fn contains(&self, tag: &str) -> bool {
		self.0.as_ref().is_some_and(|map| map.contains_key(tag))
	}

	/// Returns the text for the given language, or the empty string.
	pub fn get(&self, tag: &str) -> &str {
		self.0
			.as_ref()
			.and_then(|map| map.get(tag))
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Sets the text for the given language, returning the previous one.
	///
	/// An existing language keeps its position.
	pub fn set(&mut self, tag: impl Into<String>, value: impl Into<String>) -> Option<String> {
		self.0
			.get_or_insert_with(IndexMap::new)
			.insert(tag.into(), value.into())
	}

	pub fn remove(&mut self, tag: &str) -> Option<String> {
		self.0.as_mut().and_then(|map| map.shift_remove(tag))
	}

	/// Removes every language, leaving the map present.
	pub fn clear(&mut self) {
		self.0 = Some(IndexMap::new())
	}

	/// Makes the map untouched again.
	pub fn reset(&mut self) {
		self.0 = None
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0
			.iter()
			.flat_map(|map| map.iter().map(|(k, v)| (k.as_str(), v.as_str())))
	}

	/// Decodes a language map, giving back the value if it is not an object
	/// of strings.
	pub(crate) fn from_json(value: serde_json::Value) -> Result<Self, serde_json::Value> {
		match value {
			serde_json::Value::Object(object) => {
				if !object.values().all(serde_json::Value::is_string) {
					return Err(serde_json::Value::Object(object));
				}

				Ok(Self(Some(
					object
						.into_iter()
						.filter_map(|(k, v)| match v {
							serde_json::Value::String(s) => Some((k, s)),
							_ => None,
						})
						.collect(),
				)))
			}
			other => Err(other),
		}
	}

	pub fn as_json(&self) -> Option<serde_json::Value> {
		self.0.as_ref().map(|map| {
			serde_json::Value::Object(
				map.iter()
					.map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
					.collect(),
			)
		})
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LanguageMap {
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		Self(Some(
			iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
		))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn states() {
		let mut map = LanguageMap::new();
		assert_eq!(map.state(), MapState::Untouched);
		assert_eq!(map.as_json(), None);

		map.clear();
		assert_eq!(map.state(), MapState::Empty);
		assert_eq!(map.as_json(), Some(json!({})));

		map.set("en", "Hello");
		assert_eq!(map.state(), MapState::Populated);

		map.reset();
		assert_eq!(map.as_json(), None);
	}

	#[test]
	fn lookup() {
		let map: LanguageMap = [("en", "Hello"), ("fr", "Bonjour")].into_iter().collect();
		assert_eq!(map.get("fr"), "Bonjour");
		assert_eq!(map.get("de"), "");
		assert!(map.contains("en"));
		assert_eq!(map.languages().collect::<Vec<_>>(), ["en", "fr"]);
	}

	#[test]
	fn remove_keeps_order() {
		let mut map: LanguageMap = [("en", "a"), ("fr", "b"), ("de", "c")]
			.into_iter()
			.collect();
		assert_eq!(map.remove("en").as_deref(), Some("a"));
		assert_eq!(map.as_json(), Some(json!({ "fr": "b", "de": "c" })));
	}

	#[test]
	fn decode() {
		let map = LanguageMap::from_json(json!({ "en": "Hi", "x-pig": "Ihay" })).unwrap();
		assert_eq!(map.len(), 2);
		assert_eq!(map.get("x-pig"), "Ihay");

		assert_eq!(
			LanguageMap::from_json(json!({ "en": 1 })),
			Err(json!({ "en": 1 }))
		);
		assert_eq!(LanguageMap::from_json(json!("en")), Err(json!("en")));
	}
}
