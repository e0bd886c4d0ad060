//! Classification of runtime types against a registered candidate list.

use collbridge_api::{CollectionError, CollectionResult, TypeDescriptor};

/// An ordered candidate list: the native base abstraction first, followed by
/// the registered foreign types in registration order.
///
/// All lookups are first-match-wins over that order. When two registered
/// foreign types are both supertypes of a queried type and unrelated to each
/// other, the one registered first is reported.
#[derive(Debug, Clone)]
pub struct SearchableTypes {
    types: Vec<TypeDescriptor>,
}

impl SearchableTypes {
    pub fn new<'a>(
        base: TypeDescriptor,
        registered: impl IntoIterator<Item = &'a TypeDescriptor>,
    ) -> Self {
        let mut types = vec![base];
        for ty in registered {
            if !types.contains(ty) {
                types.push(ty.clone());
            }
        }
        Self { types }
    }

    pub fn candidates(&self) -> &[TypeDescriptor] {
        &self.types
    }

    /// Whether `ty` is exactly one of the candidates.
    pub fn has(&self, ty: &TypeDescriptor) -> bool {
        self.find(|candidate| candidate == ty).is_some()
    }

    /// Whether some candidate is `ty` or one of its supertypes.
    pub fn has_super_type_for(&self, ty: &TypeDescriptor) -> bool {
        self.find(|candidate| candidate.is_assignable_from(ty))
            .is_some()
    }

    /// The first candidate `ty` is assignable to.
    pub fn super_type(&self, ty: &TypeDescriptor) -> CollectionResult<TypeDescriptor> {
        self.find(|candidate| candidate.is_assignable_from(ty))
            .cloned()
            .ok_or_else(|| CollectionError::NoMatchingBaseType {
                type_name: ty.name().to_string(),
                candidates: self.types.iter().map(|t| t.name().to_string()).collect(),
            })
    }

    fn find(&self, matcher: impl Fn(&TypeDescriptor) -> bool) -> Option<&TypeDescriptor> {
        self.types.iter().find(|candidate| matcher(candidate))
    }
}
