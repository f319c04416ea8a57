use crate::MapState;
use indexmap::IndexMap;

/// Entries of an entity that are not declared properties.
///
/// Kept verbatim in document order and reproduced on output before the
/// declared properties.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UnknownProperties(Option<IndexMap<String, serde_json::Value>>);

impl UnknownProperties {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn state(&self) -> MapState {
		match &self.0 {
			None => MapState::Untouched,
			Some(map) if map.is_empty() => MapState::Empty,
			Some(_) => MapState::Populated,
		}
	}

	pub fn len(&self) -> usize {
		self.0.as_ref().map(IndexMap::len).unwrap_or_default()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
		self.0.as_ref().and_then(|map| map.get(key))
	}

	pub fn get_mut(&mut self, key: &str) -> Option<&mut serde_json::Value> {
		self.0.as_mut().and_then(|map| map.get_mut(key))
	}

	pub fn contains(&self, key: &str) -> bool {
		self.0.as_ref().is_some_and(|map| map.contains_key(key))
	}

	/// Inserts an entry, returning the previous value for this key.
	///
	/// An existing key keeps its position.
	pub fn insert(
		&mut self,
		key: impl Into<String>,
		value: serde_json::Value,
	) -> Option<serde_json::Value> {
		self.0
			.get_or_insert_with(IndexMap::new)
			.insert(key.into(), value)
	}

	pub fn remove(&mut self, key: &str) -> Option<serde_json::Value> {
		self.0.as_mut().and_then(|map| map.shift_remove(key))
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &serde_json::Value)> {
		self.0
			.iter()
			.flat_map(|map| map.iter().map(|(k, v)| (k.as_str(), v)))
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.iter().map(|(k, _)| k)
	}

	pub fn clear(&mut self) {
		if let Some(map) = &mut self.0 {
			map.clear()
		}
	}

	pub fn reset(&mut self) {
		self.0 = None
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn insertion_order() {
		let mut bag = UnknownProperties::new();
		assert_eq!(bag.state(), MapState::Untouched);

		bag.insert("z", json!(1));
		bag.insert("a", json!({ "x": [1, 2] }));
		bag.insert("z", json!(2));

		assert_eq!(bag.keys().collect::<Vec<_>>(), ["z", "a"]);
		assert_eq!(bag.get("z"), Some(&json!(2)));

		bag.remove("z");
		assert_eq!(bag.keys().collect::<Vec<_>>(), ["a"]);

		bag.clear();
		assert_eq!(bag.state(), MapState::Empty);
	}
}
