use crate::types::{self, VavrKind};
use collbridge_api::{
    CollectionError, CollectionResult, Container, ConversionRule, ConvertiblePair, Elements,
    TypeDescriptor, Value, native,
};
use indexmap::IndexSet;

/// Converts Vavr collections into their `java.util` counterparts.
pub struct VavrToNativeRule;

impl ConversionRule for VavrToNativeRule {
    fn id(&self) -> &'static str {
        "vavr-to-native"
    }

    fn convertible_pairs(&self) -> Vec<ConvertiblePair> {
        native::collections_and_map()
            .into_iter()
            .map(|target| ConvertiblePair::new(types::TRAVERSABLE.clone(), target))
            .collect()
    }

    fn matches(&self, source: &TypeDescriptor, target: &TypeDescriptor) -> bool {
        source.is_assignable_to(&types::TRAVERSABLE)
            && native::collections_and_map().contains(target)
    }

    /// Dispatches on the runtime type of the value, not on `target`.
    fn convert(
        &self,
        value: Value,
        _source: &TypeDescriptor,
        _target: &TypeDescriptor,
    ) -> CollectionResult<Value> {
        let container = match value {
            Value::Null => return Ok(Value::Null),
            Value::Container(container) => container,
            other => {
                return Err(CollectionError::UnsupportedForeignType(
                    other.runtime_type().name().to_string(),
                ));
            }
        };

        let Container { ty, elements } = container;
        let converted = match (VavrKind::of(&ty), elements) {
            (Some(VavrKind::Sequence), Elements::Sequence(items)) => Container::array_list(items),
            (Some(VavrKind::Map), Elements::Map(entries)) => {
                let target = if ty == *types::LINKED_HASH_MAP {
                    native::LINKED_HASH_MAP.clone()
                } else {
                    native::HASH_MAP.clone()
                };
                Container::new(target, Elements::Map(entries))
            }
            (Some(VavrKind::Set), Elements::Set(items)) => {
                let target = if ty == *types::LINKED_HASH_SET {
                    native::LINKED_HASH_SET.clone()
                } else {
                    native::HASH_SET.clone()
                };
                Container::new(target, Elements::Set(items))
            }
            _ => {
                return Err(CollectionError::UnsupportedForeignType(
                    ty.name().to_string(),
                ));
            }
        };

        Ok(Value::Container(converted))
    }
}

/// Converts `java.util` collections and maps into Vavr collections.
pub struct NativeToVavrRule;

impl ConversionRule for NativeToVavrRule {
    fn id(&self) -> &'static str {
        "native-to-vavr"
    }

    fn convertible_pairs(&self) -> Vec<ConvertiblePair> {
        vec![
            ConvertiblePair::new(native::COLLECTION.clone(), types::TRAVERSABLE.clone()),
            ConvertiblePair::new(native::MAP.clone(), types::TRAVERSABLE.clone()),
        ]
    }

    fn matches(&self, source: &TypeDescriptor, target: &TypeDescriptor) -> bool {
        // Collections never become maps.
        if source.is_collection() && types::MAP.is_assignable_from(target) {
            return false;
        }

        // Maps only become maps, or whatever the plain Traversable resolves to.
        if source.is_map()
            && !(types::MAP.is_assignable_from(target) || *target == *types::TRAVERSABLE)
        {
            return false;
        }

        true
    }

    fn convert(
        &self,
        value: Value,
        source: &TypeDescriptor,
        target: &TypeDescriptor,
    ) -> CollectionResult<Value> {
        let container = match value {
            Value::Container(container) => container,
            other => return Ok(other),
        };

        if types::SEQ.is_assignable_from(target) {
            let items = items_of(container, target)?;
            let ty = constructible(target, &types::LIST);
            return Ok(Container::new(ty, Elements::Sequence(items)).into());
        }

        if types::SET.is_assignable_from(target) {
            let items: IndexSet<Value> = items_of(container, target)?.into_iter().collect();
            let ty = constructible(target, &types::LINKED_HASH_SET);
            return Ok(Container::new(ty, Elements::Set(items)).into());
        }

        if types::MAP.is_assignable_from(target) {
            let Elements::Map(entries) = container.elements else {
                return Err(mismatch(&container.ty, target));
            };
            let ty = constructible(target, &types::LINKED_HASH_MAP);
            return Ok(Container::new(ty, Elements::Map(entries)).into());
        }

        // Only a plain Traversable leaves the choice of subtype to the source.
        if *target != *types::TRAVERSABLE {
            return Err(mismatch(&container.ty, target));
        }

        if native::LIST.is_assignable_from(source) {
            let items = items_of(container, &types::LIST)?;
            return Ok(Container::new(types::LIST.clone(), Elements::Sequence(items)).into());
        }

        if native::SET.is_assignable_from(source) {
            let items = items_of(container, &types::LINKED_HASH_SET)?;
            return Ok(Container::new(
                types::LINKED_HASH_SET.clone(),
                Elements::Set(items.into_iter().collect()),
            )
            .into());
        }

        if native::MAP.is_assignable_from(source) {
            if let Elements::Map(entries) = container.elements {
                let ty = types::LINKED_HASH_MAP.clone();
                return Ok(Container::new(ty, Elements::Map(entries)).into());
            }
            return Err(mismatch(&container.ty, &types::LINKED_HASH_MAP));
        }

        Ok(Value::Container(container))
    }
}

/// `target` itself when it can be instantiated, `fallback` for interfaces.
fn constructible(target: &TypeDescriptor, fallback: &TypeDescriptor) -> TypeDescriptor {
    if target.is_interface() {
        fallback.clone()
    } else {
        target.clone()
    }
}

fn items_of(container: Container, target: &TypeDescriptor) -> CollectionResult<Vec<Value>> {
    match container.elements {
        Elements::Map(_) => Err(mismatch(&container.ty, target)),
        elements => Ok(elements.into_items()),
    }
}

fn mismatch(source: &TypeDescriptor, target: &TypeDescriptor) -> CollectionError {
    CollectionError::UnsupportedForeignType(format!("cannot build {target} from {source}"))
}
