//! Record abstractions: typed access and the open (dynamically keyed) form.

use std::collections::HashMap;

use recwire_core::Value;

/// Field access used by the encoder.
///
/// Implemented by [`OpenRecord`] for dynamically keyed data and by caller
/// structs whose shape is known at compile time; both encode to identical
/// bytes under the same schema.
pub trait Record {
    /// The value for `name`, or `None` if the record does not carry it.
    fn field(&self, name: &str) -> Option<Value>;
}

/// Dynamically keyed value container.
///
/// Keys are unique; insertion order is irrelevant (the schema dictates wire
/// order). Immutable once handed to `encode`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpenRecord {
    fields: HashMap<String, Value>,
}

impl OpenRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field, returning the previous value if any.
    pub fn set(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(name.into(), value)
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Record for OpenRecord {
    fn field(&self, name: &str) -> Option<Value> {
        self.fields.get(name).cloned()
    }
}

impl FromIterator<(String, Value)> for OpenRecord {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Adapter giving nested `Value::Record` pairs the [`Record`] view.
pub(crate) struct PairsRecord<'a>(pub &'a [(String, Value)]);

impl Record for PairsRecord<'_> {
    fn field(&self, name: &str) -> Option<Value> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }
}
