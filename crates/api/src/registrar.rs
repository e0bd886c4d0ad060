use crate::conversion::ConverterRegistry;
use crate::error::CollectionResult;
use crate::models::{TypeDescriptor, Value};
use std::fmt;
use std::sync::Arc;

/// Flattens a foreign container into its native counterpart. Values the
/// owning registrar does not recognize are returned unchanged.
#[derive(Clone)]
pub struct Unwrapper {
    registrar: String,
    func: Arc<dyn Fn(Value) -> CollectionResult<Value> + Send + Sync>,
}

impl Unwrapper {
    pub fn new(
        registrar: impl Into<String>,
        func: impl Fn(Value) -> CollectionResult<Value> + Send + Sync + 'static,
    ) -> Self {
        Self {
            registrar: registrar.into(),
            func: Arc::new(func),
        }
    }

    pub fn registrar(&self) -> &str {
        &self.registrar
    }

    pub fn apply(&self, value: Value) -> CollectionResult<Value> {
        (self.func)(value)
    }
}

impl fmt::Debug for Unwrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unwrapper")
            .field("registrar", &self.registrar)
            .finish_non_exhaustive()
    }
}

/// Contributes a family of foreign collection and map types, conditional on
/// its backing library being usable.
pub trait CollectionRegistrar: Send + Sync {
    fn id(&self) -> &str;

    fn is_available(&self) -> bool;

    fn map_types(&self) -> Vec<TypeDescriptor>;

    fn collection_types(&self) -> Vec<TypeDescriptor>;

    fn pagination_return_types(&self) -> Vec<TypeDescriptor>;

    /// Every type of the family that should be addressable by name,
    /// including concrete implementations.
    fn known_types(&self) -> Vec<TypeDescriptor> {
        let mut types = self.map_types();
        types.extend(self.collection_types());
        types
    }

    fn unwrapper(&self) -> Unwrapper;

    fn install_converters(&self, registry: &mut dyn ConverterRegistry);
}

pub type CollectionRegistrarPtr = Arc<dyn CollectionRegistrar>;
