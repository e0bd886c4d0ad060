use super::native;
use super::types::TypeDescriptor;
use indexmap::{IndexMap, IndexSet};
use std::hash::{Hash, Hasher};

/// A runtime value flowing through conversions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Text(String),
    Container(Container),
}

impl Value {
    pub fn runtime_type(&self) -> TypeDescriptor {
        match self {
            Value::Null => native::OBJECT.clone(),
            Value::Bool(_) => native::BOOLEAN.clone(),
            Value::Int(_) => native::LONG.clone(),
            Value::Text(_) => native::STRING.clone(),
            Value::Container(container) => container.ty.clone(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Value::Container(container) => Some(container),
            _ => None,
        }
    }

    pub fn into_container(self) -> Option<Container> {
        match self {
            Value::Container(container) => Some(container),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Container> for Value {
    fn from(value: Container) -> Self {
        Value::Container(value)
    }
}

/// The closed set of container shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Elements {
    Sequence(Vec<Value>),
    Set(IndexSet<Value>),
    Map(IndexMap<Value, Value>),
}

impl Elements {
    pub fn len(&self) -> usize {
        match self {
            Elements::Sequence(items) => items.len(),
            Elements::Set(items) => items.len(),
            Elements::Map(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the elements in encounter order; map entries are skipped.
    pub fn iter_items(&self) -> Box<dyn Iterator<Item = &Value> + '_> {
        match self {
            Elements::Sequence(items) => Box::new(items.iter()),
            Elements::Set(items) => Box::new(items.iter()),
            Elements::Map(_) => Box::new(std::iter::empty()),
        }
    }

    /// Consumes the elements of a sequence or set in encounter order.
    /// Map entries yield nothing.
    pub fn into_items(self) -> Vec<Value> {
        match self {
            Elements::Sequence(items) => items,
            Elements::Set(items) => items.into_iter().collect(),
            Elements::Map(_) => Vec::new(),
        }
    }
}

// Sets and maps compare order-insensitively, so only their size takes part
// in the hash.
impl Hash for Elements {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Elements::Sequence(items) => items.hash(state),
            Elements::Set(items) => items.len().hash(state),
            Elements::Map(entries) => entries.len().hash(state),
        }
    }
}

/// A container value tagged with its runtime type.
#[derive(Debug, Clone)]
pub struct Container {
    pub ty: TypeDescriptor,
    pub elements: Elements,
}

impl Container {
    pub fn new(ty: TypeDescriptor, elements: Elements) -> Self {
        Self { ty, elements }
    }

    pub fn array_list(items: impl IntoIterator<Item = Value>) -> Self {
        Self::new(
            native::ARRAY_LIST.clone(),
            Elements::Sequence(items.into_iter().collect()),
        )
    }

    pub fn hash_set(items: impl IntoIterator<Item = Value>) -> Self {
        Self::new(
            native::HASH_SET.clone(),
            Elements::Set(items.into_iter().collect()),
        )
    }

    pub fn linked_hash_set(items: impl IntoIterator<Item = Value>) -> Self {
        Self::new(
            native::LINKED_HASH_SET.clone(),
            Elements::Set(items.into_iter().collect()),
        )
    }

    pub fn hash_map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        Self::new(
            native::HASH_MAP.clone(),
            Elements::Map(entries.into_iter().collect()),
        )
    }

    pub fn linked_hash_map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        Self::new(
            native::LINKED_HASH_MAP.clone(),
            Elements::Map(entries.into_iter().collect()),
        )
    }
}

impl PartialEq for Container {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl Eq for Container {}

impl Hash for Container {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
    }
}
