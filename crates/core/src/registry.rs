//! Process-wide view of the custom collection types contributed by the
//! available registrars.

use crate::classifier::SearchableTypes;
use collbridge_api::{
    CollectionError, CollectionRegistrarPtr, CollectionResult, ConverterRegistry, RegistryReport,
    TypeClassification, TypeDescriptor, Unwrapper, Value, native,
};
use indexmap::{IndexMap, IndexSet};
use once_cell::sync::OnceCell;
use tracing::{debug, info};

static GLOBAL: OnceCell<CustomCollections> = OnceCell::new();

/// Custom collection and map types exposed by the registrars, plus the
/// converters translating them from and to native collections.
///
/// Built once from the registrar list and immutable afterwards.
pub struct CustomCollections {
    registrars: Vec<CollectionRegistrarPtr>,
    custom_types: IndexSet<TypeDescriptor>,
    map_types: IndexSet<TypeDescriptor>,
    collection_types: IndexSet<TypeDescriptor>,
    pagination_return_types: IndexSet<TypeDescriptor>,
    map_index: SearchableTypes,
    collection_index: SearchableTypes,
    unwrappers: Vec<Unwrapper>,
    catalog: IndexMap<String, TypeDescriptor>,
}

#[derive(Default)]
pub struct CustomCollectionsBuilder {
    registrars: Vec<CollectionRegistrarPtr>,
}

impl CustomCollectionsBuilder {
    pub fn registrar(mut self, registrar: CollectionRegistrarPtr) -> Self {
        self.registrars.push(registrar);
        self
    }

    pub fn registrars(
        mut self,
        registrars: impl IntoIterator<Item = CollectionRegistrarPtr>,
    ) -> Self {
        self.registrars.extend(registrars);
        self
    }

    pub fn build(self) -> CollectionResult<CustomCollections> {
        let registrars: Vec<_> = self
            .registrars
            .into_iter()
            .filter(|registrar| {
                let available = registrar.is_available();
                if !available {
                    debug!("Skipping unavailable collection registrar {}", registrar.id());
                }
                available
            })
            .collect();

        let mut custom_types = IndexSet::new();
        let mut map_types = IndexSet::new();
        let mut collection_types = IndexSet::new();
        let mut pagination_return_types = IndexSet::new();

        for registrar in &registrars {
            for ty in registrar.collection_types() {
                debug!("{} registers collection type {}", registrar.id(), ty);
                custom_types.insert(ty.clone());
                collection_types.insert(ty);
            }
            for ty in registrar.map_types() {
                debug!("{} registers map type {}", registrar.id(), ty);
                custom_types.insert(ty.clone());
                map_types.insert(ty);
            }
            pagination_return_types.extend(registrar.pagination_return_types());
        }

        if let Some(ty) = map_types.iter().find(|ty| collection_types.contains(*ty)) {
            return Err(CollectionError::InvalidArgument(format!(
                "Type {ty} must not be registered as both a map and a collection type"
            )));
        }

        let mut catalog = IndexMap::new();
        for ty in native::all() {
            catalog.insert(ty.name().to_string(), ty);
        }
        for registrar in &registrars {
            for ty in registrar.known_types() {
                catalog
                    .entry(ty.name().to_string())
                    .or_insert(ty);
            }
        }

        let map_index = SearchableTypes::new(native::MAP.clone(), &map_types);
        let collection_index = SearchableTypes::new(native::COLLECTION.clone(), &collection_types);
        let unwrappers = registrars.iter().map(|r| r.unwrapper()).collect();

        info!(
            "Registered {} custom map and {} custom collection types from {} registrars",
            map_types.len(),
            collection_types.len(),
            registrars.len()
        );

        Ok(CustomCollections {
            registrars,
            custom_types,
            map_types,
            collection_types,
            pagination_return_types,
            map_index,
            collection_index,
            unwrappers,
            catalog,
        })
    }
}

impl CustomCollections {
    pub fn builder() -> CustomCollectionsBuilder {
        CustomCollectionsBuilder::default()
    }

    pub fn from_registrars(
        registrars: impl IntoIterator<Item = CollectionRegistrarPtr>,
    ) -> CollectionResult<Self> {
        Self::builder().registrars(registrars).build()
    }

    /// Publishes `collections` as the process-wide instance. Only the first
    /// call wins; later ones get their argument back.
    pub fn install_global(collections: CustomCollections) -> Result<&'static Self, Self> {
        GLOBAL
            .try_insert(collections)
            .map_err(|(_, rejected)| rejected)
    }

    /// Returns the process-wide instance, building it with `init` if nobody
    /// published one yet. Concurrent callers all observe the same instance.
    pub fn global_or_try_init<F, E>(init: F) -> Result<&'static Self, E>
    where
        F: FnOnce() -> Result<Self, E>,
    {
        GLOBAL.get_or_try_init(init)
    }

    pub fn global() -> Option<&'static Self> {
        GLOBAL.get()
    }

    /// All custom collection and map types.
    pub fn custom_types(&self) -> &IndexSet<TypeDescriptor> {
        &self.custom_types
    }

    pub fn map_types(&self) -> &IndexSet<TypeDescriptor> {
        &self.map_types
    }

    pub fn collection_types(&self) -> &IndexSet<TypeDescriptor> {
        &self.collection_types
    }

    /// Types that may be returned from a paginated query.
    pub fn pagination_return_types(&self) -> &IndexSet<TypeDescriptor> {
        &self.pagination_return_types
    }

    pub fn registrar_ids(&self) -> Vec<&str> {
        self.registrars.iter().map(|r| r.id()).collect()
    }

    /// Whether `ty` is exactly `java.util.Map` or one of the registered map
    /// types.
    pub fn is_map_base_type(&self, ty: &TypeDescriptor) -> bool {
        self.map_index.has(ty)
    }

    /// The logical map interface of `ty`, e.g. `java.util.Map` for
    /// `java.util.HashMap`.
    pub fn map_base_type(&self, ty: &TypeDescriptor) -> CollectionResult<TypeDescriptor> {
        self.map_index.super_type(ty)
    }

    pub fn is_map(&self, ty: &TypeDescriptor) -> bool {
        self.map_index.has_super_type_for(ty)
    }

    pub fn is_collection(&self, ty: &TypeDescriptor) -> bool {
        self.collection_index.has_super_type_for(ty)
    }

    /// One unwrapper per available registrar.
    pub fn unwrappers(&self) -> &[Unwrapper] {
        &self.unwrappers
    }

    /// Runs `value` through every unwrapper in registration order.
    pub fn unwrap_to_native(&self, value: Value) -> CollectionResult<Value> {
        self.unwrappers
            .iter()
            .try_fold(value, |value, unwrapper| unwrapper.apply(value))
    }

    /// Installs the conversion rules of all registrars into `registry`.
    ///
    /// The general collection-to-object rule is removed first as it would
    /// also turn collections into maps.
    pub fn install_conversions(&self, registry: &mut dyn ConverterRegistry) {
        registry.remove_rule(&native::COLLECTION, &native::OBJECT);

        for registrar in &self.registrars {
            registrar.install_converters(registry);
        }

        info!(
            "Installed collection converters of {} registrars",
            self.registrars.len()
        );
    }

    /// Resolves a type name against the native types and everything the
    /// registrars declared.
    pub fn lookup_type(&self, name: &str) -> CollectionResult<TypeDescriptor> {
        self.catalog
            .get(name.trim())
            .cloned()
            .ok_or_else(|| CollectionError::InvalidArgument(format!("Unknown type: {name}")))
    }

    pub fn known_types(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.catalog.values()
    }

    pub fn classify(&self, ty: &TypeDescriptor) -> TypeClassification {
        let is_map = self.is_map(ty);
        TypeClassification {
            type_name: ty.name().to_string(),
            is_custom: self.custom_types.contains(ty),
            is_map,
            is_collection: self.is_collection(ty),
            map_base_type: is_map
                .then(|| self.map_base_type(ty).ok())
                .flatten()
                .map(|base| base.name().to_string()),
        }
    }

    pub fn report(&self) -> RegistryReport {
        let names = |types: &IndexSet<TypeDescriptor>| -> Vec<String> {
            types.iter().map(|t| t.name().to_string()).collect()
        };
        RegistryReport {
            registrars: self.registrar_ids().into_iter().map(str::to_string).collect(),
            map_types: names(&self.map_types),
            collection_types: names(&self.collection_types),
            pagination_return_types: names(&self.pagination_return_types),
        }
    }
}
