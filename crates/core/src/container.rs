use crate::{
	warning, Environment, Error, FunctionalArrayPolicy, PropertyDefinition, Value, Warning,
};
use json_ld_vocab_syntax::AsJson;
use std::ops::Index;

/// Values of a non-functional property, in document order.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Values(Vec<Value>);

impl Values {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns the value at the given position.
	///
	/// # Panics
	///
	/// Panics if `index` is out of bounds.
	pub fn get(&self, index: usize) -> &Value {
		&self.0[index]
	}

	pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
		self.0.get_mut(index)
	}

	pub fn first(&self) -> Option<&Value> {
		self.0.first()
	}

	pub fn iter(&self) -> std::slice::Iter<Value> {
		self.0.iter()
	}

	pub fn iter_mut(&mut self) -> std::slice::IterMut<Value> {
		self.0.iter_mut()
	}

	pub fn as_slice(&self) -> &[Value] {
		&self.0
	}

	pub fn append(&mut self, value: Value) {
		self.0.push(value)
	}

	pub fn prepend(&mut self, value: Value) {
		self.0.insert(0, value)
	}

	/// Inserts a value at the given position, shifting the following ones.
	///
	/// # Panics
	///
	/// Panics if `index > len`.
	pub fn insert(&mut self, index: usize, value: Value) {
		self.0.insert(index, value)
	}

	/// Replaces the value at the given position, returning the previous one.
	///
	/// # Panics
	///
	/// Panics if `index` is out of bounds.
	pub fn set(&mut self, index: usize, value: Value) -> Value {
		std::mem::replace(&mut self.0[index], value)
	}

	/// Removes the value at the given position.
	///
	/// # Panics
	///
	/// Panics if `index` is out of bounds.
	pub fn remove(&mut self, index: usize) -> Value {
		self.0.remove(index)
	}

	pub fn clear(&mut self) {
		self.0.clear()
	}

	pub fn into_vec(self) -> Vec<Value> {
		self.0
	}

	pub(crate) fn from_json<W: warning::Handler<Warning>>(
		value: serde_json::Value,
		property: &PropertyDefinition,
		env: &mut Environment<W>,
		depth: usize,
	) -> Result<Self, Error> {
		match value {
			serde_json::Value::Array(items) => {
				if let Some(limit) = env.options.max_width {
					if items.len() > limit {
						return Err(Error::WidthLimitExceeded {
							property: property.name().to_owned(),
							len: items.len(),
							limit,
						});
					}
				}

				items
					.into_iter()
					.map(|item| Value::from_json(item, property, env, depth))
					.collect()
			}
			value => Ok(Self(vec![Value::from_json(value, property, env, depth)?])),
		}
	}

	/// Encodes the values.
	///
	/// Returns `None` when there are no values, the single value itself when
	/// there is exactly one, and an array otherwise. A single unknown array
	/// keeps its enclosing array, otherwise it would be read back as
	/// multiple values.
	pub fn as_json(&self) -> Option<serde_json::Value> {
		match self.0.as_slice() {
			[] => None,
			[value @ Value::Unknown(serde_json::Value::Array(_))] => {
				Some(serde_json::Value::Array(vec![value.as_json()]))
			}
			[value] => Some(value.as_json()),
			values => Some(serde_json::Value::Array(
				values.iter().map(AsJson::as_json).collect(),
			)),
		}
	}
}

impl Index<usize> for Values {
	type Output = Value;

	fn index(&self, index: usize) -> &Value {
		self.get(index)
	}
}

impl From<Vec<Value>> for Values {
	fn from(value: Vec<Value>) -> Self {
		Self(value)
	}
}

impl FromIterator<Value> for Values {
	fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl IntoIterator for Values {
	type Item = Value;
	type IntoIter = std::vec::IntoIter<Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a Values {
	type Item = &'a Value;
	type IntoIter = std::slice::Iter<'a, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

/// Value of a functional property.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Functional(Option<Value>);

impl Functional {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self) -> Option<&Value> {
		self.0.as_ref()
	}

	pub fn get_mut(&mut self) -> Option<&mut Value> {
		self.0.as_mut()
	}

	/// Sets the value, returning the previous one.
	pub fn set(&mut self, value: Value) -> Option<Value> {
		self.0.replace(value)
	}

	pub fn clear(&mut self) -> Option<Value> {
		self.0.take()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_none()
	}

	pub fn into_inner(self) -> Option<Value> {
		self.0
	}

	pub(crate) fn from_json<W: warning::Handler<Warning>>(
		value: serde_json::Value,
		property: &PropertyDefinition,
		env: &mut Environment<W>,
		depth: usize,
	) -> Result<Self, Error> {
		match value {
			serde_json::Value::Array(items) if items.is_empty() => Ok(Self(None)),
			serde_json::Value::Array(items) => {
				let len = items.len();
				match env.options.functional_array {
					FunctionalArrayPolicy::Reject => {
						Err(Error::FunctionalArray(property.name().to_owned()))
					}
					FunctionalArrayPolicy::Preserve => {
						env.warnings.handle(Warning::FunctionalArray {
							property: property.name().to_owned(),
							len,
						});
						Ok(Self(Some(Value::Unknown(serde_json::Value::Array(items)))))
					}
					FunctionalArrayPolicy::TakeFirst => {
						env.warnings.handle(Warning::FunctionalArray {
							property: property.name().to_owned(),
							len,
						});

						match items.into_iter().next() {
							Some(first) => {
								Ok(Self(Some(Value::from_json(first, property, env, depth)?)))
							}
							None => Ok(Self(None)),
						}
					}
				}
			}
			value => Ok(Self(Some(Value::from_json(value, property, env, depth)?))),
		}
	}

	pub fn as_json(&self) -> Option<serde_json::Value> {
		self.0.as_ref().map(AsJson::as_json)
	}
}

impl From<Option<Value>> for Functional {
	fn from(value: Option<Value>) -> Self {
		Self(value)
	}
}

/// Storage of a property, shaped by its functionality.
#[derive(Clone, PartialEq, Debug)]
pub enum Container {
	Functional(Functional),
	NonFunctional(Values),
}

impl Container {
	/// Creates an empty container for the given property.
	pub fn new(property: &PropertyDefinition) -> Self {
		if property.is_functional() {
			Self::Functional(Functional::new())
		} else {
			Self::NonFunctional(Values::new())
		}
	}

	pub fn is_functional(&self) -> bool {
		matches!(self, Self::Functional(_))
	}

	pub fn len(&self) -> usize {
		match self {
			Self::Functional(f) => usize::from(!f.is_empty()),
			Self::NonFunctional(v) => v.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Iterates over the values, in order.
	pub fn iter(&self) -> std::slice::Iter<Value> {
		match self {
			Self::Functional(f) => f.0.as_slice().iter(),
			Self::NonFunctional(v) => v.iter(),
		}
	}

	pub fn first(&self) -> Option<&Value> {
		self.iter().next()
	}

	pub fn as_values(&self) -> Option<&Values> {
		match self {
			Self::NonFunctional(v) => Some(v),
			Self::Functional(_) => None,
		}
	}

	pub fn as_values_mut(&mut self) -> Option<&mut Values> {
		match self {
			Self::NonFunctional(v) => Some(v),
			Self::Functional(_) => None,
		}
	}

	pub fn as_functional(&self) -> Option<&Functional> {
		match self {
			Self::Functional(f) => Some(f),
			Self::NonFunctional(_) => None,
		}
	}

	pub fn as_functional_mut(&mut self) -> Option<&mut Functional> {
		match self {
			Self::Functional(f) => Some(f),
			Self::NonFunctional(_) => None,
		}
	}

	pub fn clear(&mut self) {
		match self {
			Self::Functional(f) => {
				f.clear();
			}
			Self::NonFunctional(v) => v.clear(),
		}
	}

	pub fn as_json(&self) -> Option<serde_json::Value> {
		match self {
			Self::Functional(f) => f.as_json(),
			Self::NonFunctional(v) => v.as_json(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Options, Registry, ValueKind};
	use json_ld_vocab_syntax::{Primitive, PrimitiveKind};
	use serde_json::json;

	fn property(functional: bool) -> PropertyDefinition {
		let accepts = vec![ValueKind::Iri, ValueKind::Primitive(PrimitiveKind::String)];
		if functional {
			PropertyDefinition::functional("p", accepts)
		} else {
			PropertyDefinition::non_functional("p", accepts)
		}
	}

	fn decode_functional(
		value: serde_json::Value,
		options: Options,
	) -> (Result<Functional, Error>, Vec<Warning>) {
		let registry = Registry::default();
		let mut warnings = Vec::new();
		let mut env = Environment {
			registry: &registry,
			options,
			warnings: &mut warnings,
		};
		let result = Functional::from_json(value, &property(true), &mut env, 0);
		(result, warnings)
	}

	#[test]
	fn values_collapse() {
		let mut values = Values::new();
		assert_eq!(values.as_json(), None);

		values.append(Value::Primitive(Primitive::from("a")));
		assert_eq!(values.as_json(), Some(json!("a")));

		values.append(Value::Primitive(Primitive::from("b")));
		assert_eq!(values.as_json(), Some(json!(["a", "b"])));
	}

	#[test]
	fn values_positional_edits() {
		let mut values: Values = ["a", "b", "c"]
			.into_iter()
			.map(|s| Value::Primitive(Primitive::from(s)))
			.collect();

		let removed = values.remove(1);
		assert_eq!(removed.as_str(), Some("b"));

		values.prepend(Value::Primitive(Primitive::from("z")));
		assert_eq!(values.as_json(), Some(json!(["z", "a", "c"])));
		assert_eq!(values[2].as_str(), Some("c"));
	}

	#[test]
	#[should_panic]
	fn values_get_out_of_bounds() {
		Values::new().get(0);
	}

	#[test]
	fn single_nested_array_keeps_its_wrapper() {
		let registry = Registry::default();
		let mut env = Environment {
			registry: &registry,
			options: Options::default(),
			warnings: &mut (),
		};

		let input = json!([["https://ex.com/a", "https://ex.com/b"]]);
		let first = Values::from_json(input.clone(), &property(false), &mut env, 0).unwrap();
		assert_eq!(first.len(), 1);
		assert!(first[0].is_unknown());

		let output = first.as_json().unwrap();
		assert_eq!(output, input);

		let second = Values::from_json(output, &property(false), &mut env, 0).unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn width_limit() {
		let registry = Registry::default();
		let mut env = Environment {
			registry: &registry,
			options: Options::default().with_max_width(Some(2)),
			warnings: &mut (),
		};

		let result = Values::from_json(json!(["a", "b", "c"]), &property(false), &mut env, 0);
		assert!(matches!(
			result,
			Err(Error::WidthLimitExceeded { len: 3, limit: 2, .. })
		));
	}

	#[test]
	fn functional_array_preserve() {
		let (result, warnings) = decode_functional(json!(["a", "b"]), Options::default());
		let f = result.unwrap();
		assert_eq!(f.get().unwrap().as_unknown(), Some(&json!(["a", "b"])));
		assert_eq!(f.as_json(), Some(json!(["a", "b"])));
		assert_eq!(warnings.len(), 1);
	}

	#[test]
	fn functional_array_take_first() {
		let options = Options::default().with_functional_array(FunctionalArrayPolicy::TakeFirst);
		let (result, _) = decode_functional(json!(["a", "b"]), options);
		assert_eq!(result.unwrap().as_json(), Some(json!("a")));
	}

	#[test]
	fn functional_array_reject() {
		let (result, _) = decode_functional(json!(["a", "b"]), Options::default().strict());
		assert!(matches!(result, Err(Error::FunctionalArray(p)) if p == "p"));
	}

	#[test]
	fn functional_empty_array() {
		let (result, warnings) = decode_functional(json!([]), Options::default().strict());
		assert!(result.unwrap().is_empty());
		assert!(warnings.is_empty());
	}

	#[test]
	fn container_shape() {
		assert!(Container::new(&property(true)).is_functional());
		assert!(!Container::new(&property(false)).is_functional());
	}
}
