//! Descriptors for the `io.vavr.collection` hierarchy.
//!
//! Directly constructible types are declared as classes; conversions build
//! values of those types when asked for them by name.

use collbridge_api::{TypeDescriptor, TypeKind, native};
use once_cell::sync::Lazy;

type Decl = Lazy<TypeDescriptor>;

fn declare(name: &'static str, kind: TypeKind, supertypes: &[&'static Decl]) -> TypeDescriptor {
    TypeDescriptor::declare(
        name,
        kind,
        supertypes.iter().map(|t| (***t).clone()).collect(),
    )
}

pub static TRAVERSABLE: Decl = Lazy::new(|| {
    TypeDescriptor::declare(
        "io.vavr.collection.Traversable",
        TypeKind::Interface,
        vec![native::ITERABLE.clone()],
    )
});

pub static SEQ: Decl =
    Lazy::new(|| declare("io.vavr.collection.Seq", TypeKind::Interface, &[&TRAVERSABLE]));
pub static LINEAR_SEQ: Decl =
    Lazy::new(|| declare("io.vavr.collection.LinearSeq", TypeKind::Interface, &[&SEQ]));
pub static INDEXED_SEQ: Decl =
    Lazy::new(|| declare("io.vavr.collection.IndexedSeq", TypeKind::Interface, &[&SEQ]));
pub static LIST: Decl =
    Lazy::new(|| declare("io.vavr.collection.List", TypeKind::Class, &[&LINEAR_SEQ]));
pub static QUEUE: Decl =
    Lazy::new(|| declare("io.vavr.collection.Queue", TypeKind::Class, &[&LINEAR_SEQ]));
pub static STREAM: Decl =
    Lazy::new(|| declare("io.vavr.collection.Stream", TypeKind::Class, &[&LINEAR_SEQ]));
pub static VECTOR: Decl =
    Lazy::new(|| declare("io.vavr.collection.Vector", TypeKind::Class, &[&INDEXED_SEQ]));
pub static ARRAY: Decl =
    Lazy::new(|| declare("io.vavr.collection.Array", TypeKind::Class, &[&INDEXED_SEQ]));

pub static SET: Decl =
    Lazy::new(|| declare("io.vavr.collection.Set", TypeKind::Interface, &[&TRAVERSABLE]));
pub static HASH_SET: Decl =
    Lazy::new(|| declare("io.vavr.collection.HashSet", TypeKind::Class, &[&SET]));
pub static LINKED_HASH_SET: Decl =
    Lazy::new(|| declare("io.vavr.collection.LinkedHashSet", TypeKind::Class, &[&SET]));

pub static MAP: Decl =
    Lazy::new(|| declare("io.vavr.collection.Map", TypeKind::Interface, &[&TRAVERSABLE]));
pub static HASH_MAP: Decl =
    Lazy::new(|| declare("io.vavr.collection.HashMap", TypeKind::Class, &[&MAP]));
pub static LINKED_HASH_MAP: Decl =
    Lazy::new(|| declare("io.vavr.collection.LinkedHashMap", TypeKind::Class, &[&MAP]));

/// A traversable that is neither a sequence, a set nor a map.
pub static TREE: Decl =
    Lazy::new(|| declare("io.vavr.collection.Tree", TypeKind::Class, &[&TRAVERSABLE]));

/// Shape of a Vavr container, derived from its runtime type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VavrKind {
    Sequence,
    Set,
    Map,
}

impl VavrKind {
    pub fn of(ty: &TypeDescriptor) -> Option<Self> {
        if SEQ.is_assignable_from(ty) {
            Some(VavrKind::Sequence)
        } else if MAP.is_assignable_from(ty) {
            Some(VavrKind::Map)
        } else if SET.is_assignable_from(ty) {
            Some(VavrKind::Set)
        } else {
            None
        }
    }
}

pub fn all() -> Vec<TypeDescriptor> {
    [
        &TRAVERSABLE,
        &SEQ,
        &LINEAR_SEQ,
        &INDEXED_SEQ,
        &LIST,
        &QUEUE,
        &STREAM,
        &VECTOR,
        &ARRAY,
        &SET,
        &HASH_SET,
        &LINKED_HASH_SET,
        &MAP,
        &HASH_MAP,
        &LINKED_HASH_MAP,
        &TREE,
    ]
    .into_iter()
    .map(|t| (**t).clone())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_the_hierarchy() {
        assert_eq!(VavrKind::of(&VECTOR), Some(VavrKind::Sequence));
        assert_eq!(VavrKind::of(&LINKED_HASH_SET), Some(VavrKind::Set));
        assert_eq!(VavrKind::of(&HASH_MAP), Some(VavrKind::Map));
        assert_eq!(VavrKind::of(&TREE), None);
        assert_eq!(VavrKind::of(&native::ARRAY_LIST), None);
    }

    #[test]
    fn traversables_are_iterable_but_not_native_collections() {
        assert!(native::ITERABLE.is_assignable_from(&LIST));
        assert!(!LIST.is_collection());
        assert!(!HASH_MAP.is_map());
    }
}
