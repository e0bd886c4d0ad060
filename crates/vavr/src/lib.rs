//! Vavr collections support: type declarations, converters from and to
//! `java.util` collections, and the registrar exposing both.

pub mod rules;
pub mod types;

use collbridge_api::{
    CollectionRegistrar, CollectionRegistrarPtr, ConversionRule, ConversionRulePtr,
    ConverterRegistry, TypeDescriptor, Unwrapper, native,
};
use rules::{NativeToVavrRule, VavrToNativeRule};
use std::sync::Arc;
use tracing::debug;

pub const REGISTRAR_ID: &str = "vavr";

#[derive(Debug, Default, Clone, Copy)]
pub struct VavrCollections;

impl VavrCollections {
    pub fn new() -> Self {
        Self
    }
}

impl CollectionRegistrar for VavrCollections {
    fn id(&self) -> &str {
        REGISTRAR_ID
    }

    // The Vavr types are compiled into this crate.
    fn is_available(&self) -> bool {
        true
    }

    fn map_types(&self) -> Vec<TypeDescriptor> {
        vec![types::MAP.clone()]
    }

    fn collection_types(&self) -> Vec<TypeDescriptor> {
        vec![types::SEQ.clone(), types::SET.clone()]
    }

    fn pagination_return_types(&self) -> Vec<TypeDescriptor> {
        vec![types::SEQ.clone()]
    }

    fn known_types(&self) -> Vec<TypeDescriptor> {
        types::all()
    }

    fn unwrapper(&self) -> Unwrapper {
        Unwrapper::new(REGISTRAR_ID, |value| {
            let source = value.runtime_type();
            if types::TRAVERSABLE.is_assignable_from(&source) {
                VavrToNativeRule.convert(value, &source, &native::OBJECT)
            } else {
                Ok(value)
            }
        })
    }

    fn install_converters(&self, registry: &mut dyn ConverterRegistry) {
        let rules: [ConversionRulePtr; 2] =
            [Arc::new(NativeToVavrRule), Arc::new(VavrToNativeRule)];
        for rule in rules {
            debug!("Installing Vavr conversion rule {}", rule.id());
            registry.add_rule(rule);
        }
    }
}

pub fn vavr_registrar() -> CollectionRegistrarPtr {
    Arc::new(VavrCollections::new())
}
