//! Descriptors for the JDK's own container types.

use super::types::{TypeDescriptor, TypeKind};
use once_cell::sync::Lazy;

type Decl = Lazy<TypeDescriptor>;

fn interface(name: &'static str, supertypes: &[&'static Decl]) -> TypeDescriptor {
    TypeDescriptor::declare(
        name,
        TypeKind::Interface,
        supertypes.iter().map(|t| (***t).clone()).collect(),
    )
}

fn class(name: &'static str, supertypes: &[&'static Decl]) -> TypeDescriptor {
    TypeDescriptor::declare(
        name,
        TypeKind::Class,
        supertypes.iter().map(|t| (***t).clone()).collect(),
    )
}

pub static OBJECT: Decl = Lazy::new(|| class(super::types::OBJECT_NAME, &[]));
pub static STRING: Lazy<TypeDescriptor> = Lazy::new(|| class("java.lang.String", &[]));
pub static LONG: Lazy<TypeDescriptor> = Lazy::new(|| class("java.lang.Long", &[]));
pub static BOOLEAN: Lazy<TypeDescriptor> = Lazy::new(|| class("java.lang.Boolean", &[]));

pub static ITERABLE: Lazy<TypeDescriptor> = Lazy::new(|| interface("java.lang.Iterable", &[]));
pub static COLLECTION: Lazy<TypeDescriptor> =
    Lazy::new(|| interface("java.util.Collection", &[&ITERABLE]));
pub static LIST: Lazy<TypeDescriptor> = Lazy::new(|| interface("java.util.List", &[&COLLECTION]));
pub static SET: Lazy<TypeDescriptor> = Lazy::new(|| interface("java.util.Set", &[&COLLECTION]));
pub static MAP: Lazy<TypeDescriptor> = Lazy::new(|| interface("java.util.Map", &[]));

pub static ARRAY_LIST: Lazy<TypeDescriptor> = Lazy::new(|| class("java.util.ArrayList", &[&LIST]));
pub static LINKED_LIST: Lazy<TypeDescriptor> =
    Lazy::new(|| class("java.util.LinkedList", &[&LIST]));
pub static HASH_SET: Lazy<TypeDescriptor> = Lazy::new(|| class("java.util.HashSet", &[&SET]));
pub static LINKED_HASH_SET: Lazy<TypeDescriptor> =
    Lazy::new(|| class("java.util.LinkedHashSet", &[&HASH_SET, &SET]));
pub static HASH_MAP: Lazy<TypeDescriptor> = Lazy::new(|| class("java.util.HashMap", &[&MAP]));
pub static LINKED_HASH_MAP: Lazy<TypeDescriptor> =
    Lazy::new(|| class("java.util.LinkedHashMap", &[&HASH_MAP, &MAP]));

/// The four native abstractions foreign containers are converted into.
pub fn collections_and_map() -> [TypeDescriptor; 4] {
    [
        COLLECTION.clone(),
        LIST.clone(),
        SET.clone(),
        MAP.clone(),
    ]
}

/// Every native type known to this module.
pub fn all() -> Vec<TypeDescriptor> {
    [
        &OBJECT,
        &STRING,
        &LONG,
        &BOOLEAN,
        &ITERABLE,
        &COLLECTION,
        &LIST,
        &SET,
        &MAP,
        &ARRAY_LIST,
        &LINKED_LIST,
        &HASH_SET,
        &LINKED_HASH_SET,
        &HASH_MAP,
        &LINKED_HASH_MAP,
    ]
    .into_iter()
    .map(|t| (**t).clone())
    .collect()
}
