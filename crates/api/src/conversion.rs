use crate::error::CollectionResult;
use crate::models::{TypeDescriptor, Value};
use std::sync::Arc;

/// A (source, target) pair a rule declares itself responsible for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConvertiblePair {
    pub source: TypeDescriptor,
    pub target: TypeDescriptor,
}

impl ConvertiblePair {
    pub fn new(source: TypeDescriptor, target: TypeDescriptor) -> Self {
        Self { source, target }
    }
}

/// A conditional converter between container families.
pub trait ConversionRule: Send + Sync {
    /// Stable identifier; registering a rule with a known id replaces the
    /// earlier registration.
    fn id(&self) -> &'static str;

    /// The pairs the host dispatches to this rule.
    fn convertible_pairs(&self) -> Vec<ConvertiblePair>;

    /// Narrows the declared pairs for a concrete source and target.
    fn matches(&self, _source: &TypeDescriptor, _target: &TypeDescriptor) -> bool {
        true
    }

    /// Only invoked after `matches` accepted the pair.
    fn convert(
        &self,
        value: Value,
        source: &TypeDescriptor,
        target: &TypeDescriptor,
    ) -> CollectionResult<Value>;
}

pub type ConversionRulePtr = Arc<dyn ConversionRule>;

/// The host's converter registry as seen by registrars.
pub trait ConverterRegistry {
    fn add_rule(&mut self, rule: ConversionRulePtr);

    /// Drops every rule registered for exactly this pair.
    fn remove_rule(&mut self, source: &TypeDescriptor, target: &TypeDescriptor);
}
