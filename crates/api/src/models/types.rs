use crate::error::{CollectionError, CollectionResult};
use serde::{Serialize, Serializer};
use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Fully qualified name of the root of every reference type hierarchy.
pub const OBJECT_NAME: &str = "java.lang.Object";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Interface,
    Class,
}

struct TypeInfo {
    name: String,
    kind: TypeKind,
    supertypes: Vec<TypeDescriptor>,
}

/// Handle to a runtime type: a name plus its direct supertypes.
///
/// Descriptors are compared and hashed by their fully qualified name, so two
/// handles built independently for the same name are the same type.
#[derive(Clone)]
pub struct TypeDescriptor(Arc<TypeInfo>);

impl TypeDescriptor {
    pub fn new(
        name: impl Into<String>,
        kind: TypeKind,
        supertypes: Vec<TypeDescriptor>,
    ) -> CollectionResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CollectionError::InvalidArgument(
                "Type must not be empty".to_string(),
            ));
        }
        Ok(Self(Arc::new(TypeInfo {
            name,
            kind,
            supertypes,
        })))
    }

    /// Declares a type whose name is known at compile time, as used for the
    /// static type catalogues.
    pub fn declare(name: &'static str, kind: TypeKind, supertypes: Vec<TypeDescriptor>) -> Self {
        debug_assert!(!name.trim().is_empty());
        Self(Arc::new(TypeInfo {
            name: name.to_string(),
            kind,
            supertypes,
        }))
    }

    pub fn interface(
        name: impl Into<String>,
        supertypes: Vec<TypeDescriptor>,
    ) -> CollectionResult<Self> {
        Self::new(name, TypeKind::Interface, supertypes)
    }

    pub fn class(
        name: impl Into<String>,
        supertypes: Vec<TypeDescriptor>,
    ) -> CollectionResult<Self> {
        Self::new(name, TypeKind::Class, supertypes)
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// The unqualified part of the name, e.g. `List` for `java.util.List`.
    pub fn simple_name(&self) -> &str {
        self.0
            .name
            .rsplit_once('.')
            .map(|(_, simple)| simple)
            .unwrap_or(&self.0.name)
    }

    pub fn kind(&self) -> TypeKind {
        self.0.kind
    }

    pub fn is_interface(&self) -> bool {
        self.0.kind == TypeKind::Interface
    }

    pub fn supertypes(&self) -> &[TypeDescriptor] {
        &self.0.supertypes
    }

    pub fn is_object(&self) -> bool {
        self.0.name == OBJECT_NAME
    }

    /// Checks whether a value of type `other` can be assigned to this type,
    /// i.e. `other` is this type or one of its subtypes.
    pub fn is_assignable_from(&self, other: &TypeDescriptor) -> bool {
        if self == other || self.is_object() {
            return true;
        }

        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        queue.push_back(other);
        visited.insert(other.name());

        while let Some(current) = queue.pop_front() {
            for parent in current.supertypes() {
                if parent == self {
                    return true;
                }
                if visited.insert(parent.name()) {
                    queue.push_back(parent);
                }
            }
        }

        false
    }

    pub fn is_assignable_to(&self, other: &TypeDescriptor) -> bool {
        other.is_assignable_from(self)
    }

    /// The type itself followed by all of its supertypes in breadth-first
    /// order, each listed once. `java.lang.Object` always comes last.
    pub fn ancestors(&self) -> Vec<TypeDescriptor> {
        let mut result = vec![self.clone()];
        let mut visited: HashSet<String> = HashSet::from([self.name().to_string()]);
        let mut cursor = 0;

        while cursor < result.len() {
            let current = result[cursor].clone();
            for parent in current.supertypes() {
                if !parent.is_object() && visited.insert(parent.name().to_string()) {
                    result.push(parent.clone());
                }
            }
            cursor += 1;
        }

        if !self.is_object() {
            result.push(super::native::OBJECT.clone());
        }
        result
    }

    pub fn is_collection(&self) -> bool {
        super::native::COLLECTION.is_assignable_from(self)
    }

    pub fn is_map(&self) -> bool {
        super::native::MAP.is_assignable_from(self)
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.name == other.0.name
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.name.hash(state);
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.name)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.name)
    }
}

impl Serialize for TypeDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
