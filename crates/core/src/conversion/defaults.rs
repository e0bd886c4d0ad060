use collbridge_api::{
    CollectionResult, ConversionRule, ConvertiblePair, TypeDescriptor, Value, native,
};

/// Catch-all rule turning any collection into its first element.
pub struct CollectionToObjectRule;

impl ConversionRule for CollectionToObjectRule {
    fn id(&self) -> &'static str {
        "collection-to-object"
    }

    fn convertible_pairs(&self) -> Vec<ConvertiblePair> {
        vec![ConvertiblePair::new(
            native::COLLECTION.clone(),
            native::OBJECT.clone(),
        )]
    }

    fn convert(
        &self,
        value: Value,
        _source: &TypeDescriptor,
        _target: &TypeDescriptor,
    ) -> CollectionResult<Value> {
        let first = value
            .into_container()
            .and_then(|container| container.elements.into_items().into_iter().next());
        Ok(first.unwrap_or(Value::Null))
    }
}
