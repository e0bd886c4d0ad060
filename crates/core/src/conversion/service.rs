use super::defaults::CollectionToObjectRule;
use collbridge_api::{
    CollectionError, CollectionResult, ConversionRulePtr, ConverterRegistry, ConvertiblePair,
    TypeDescriptor, Value,
};
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// Converter registry with hierarchy-aware dispatch.
///
/// Rules are looked up for every combination of the source's and the target's
/// ancestors, most specific first. Within one pair the most recently added
/// rule is consulted first.
#[derive(Default)]
pub struct ConversionService {
    rules: IndexMap<ConvertiblePair, Vec<ConversionRulePtr>>,
}

impl ConversionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A service preloaded with the general collection-to-object rule.
    pub fn with_defaults() -> Self {
        let mut service = Self::new();
        service.add_rule(Arc::new(CollectionToObjectRule));
        service
    }

    /// Ids of the rules registered for exactly this pair, in lookup order.
    pub fn rules_for(&self, source: &TypeDescriptor, target: &TypeDescriptor) -> Vec<&'static str> {
        self.rules
            .get(&ConvertiblePair::new(source.clone(), target.clone()))
            .map(|rules| rules.iter().map(|rule| rule.id()).collect())
            .unwrap_or_default()
    }

    /// Number of (pair, rule) registrations.
    pub fn len(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn can_convert(&self, source: &TypeDescriptor, target: &TypeDescriptor) -> bool {
        target.is_assignable_from(source) || self.find_rule(source, target).is_some()
    }

    /// Converts `value` into an instance of `target`. Values already
    /// assignable to `target` are returned as they are.
    pub fn convert(&self, value: Value, target: &TypeDescriptor) -> CollectionResult<Value> {
        if value.is_null() {
            return Ok(Value::Null);
        }

        let source = value.runtime_type();
        if target.is_assignable_from(&source) {
            return Ok(value);
        }

        let rule = self
            .find_rule(&source, target)
            .ok_or_else(|| CollectionError::NoConverter {
                source_type: source.name().to_string(),
                target_type: target.name().to_string(),
            })?;

        trace!("Converting {} to {} using {}", source, target, rule.id());
        rule.convert(value, &source, target)
    }

    fn find_rule(
        &self,
        source: &TypeDescriptor,
        target: &TypeDescriptor,
    ) -> Option<&ConversionRulePtr> {
        let target_hierarchy = target.ancestors();

        for source_candidate in source.ancestors() {
            for target_candidate in &target_hierarchy {
                let pair = ConvertiblePair::new(source_candidate.clone(), target_candidate.clone());
                let Some(rules) = self.rules.get(&pair) else {
                    continue;
                };
                if let Some(rule) = rules.iter().find(|rule| rule.matches(source, target)) {
                    return Some(rule);
                }
            }
        }

        None
    }
}

impl ConverterRegistry for ConversionService {
    fn add_rule(&mut self, rule: ConversionRulePtr) {
        for pair in rule.convertible_pairs() {
            debug!(
                "Adding rule {} for {} -> {}",
                rule.id(),
                pair.source,
                pair.target
            );
            let rules = self.rules.entry(pair).or_default();
            rules.retain(|existing| existing.id() != rule.id());
            rules.insert(0, rule.clone());
        }
    }

    fn remove_rule(&mut self, source: &TypeDescriptor, target: &TypeDescriptor) {
        let pair = ConvertiblePair::new(source.clone(), target.clone());
        if self.rules.shift_remove(&pair).is_some() {
            debug!("Removed rules for {} -> {}", source, target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collbridge_api::{Container, ConversionRule, native};

    struct TextLengthRule;

    impl ConversionRule for TextLengthRule {
        fn id(&self) -> &'static str {
            "text-length"
        }

        fn convertible_pairs(&self) -> Vec<ConvertiblePair> {
            vec![ConvertiblePair::new(
                native::STRING.clone(),
                native::LONG.clone(),
            )]
        }

        fn convert(
            &self,
            value: Value,
            _source: &TypeDescriptor,
            _target: &TypeDescriptor,
        ) -> CollectionResult<Value> {
            match value {
                Value::Text(text) => Ok(Value::Int(text.len() as i64)),
                other => Ok(other),
            }
        }
    }

    #[test]
    fn assignable_values_pass_through() {
        let service = ConversionService::new();
        let list = Value::from(Container::array_list([Value::from(1)]));
        assert_eq!(
            service.convert(list.clone(), &native::COLLECTION).unwrap(),
            list
        );
        assert_eq!(service.convert(Value::Null, &native::MAP).unwrap(), Value::Null);
    }

    #[test]
    fn missing_rule_is_reported() {
        let service = ConversionService::new();
        let err = service
            .convert(Value::from("abc"), &native::LONG)
            .unwrap_err();
        assert!(matches!(err, CollectionError::NoConverter { .. }));
        assert!(!service.can_convert(&native::STRING, &native::LONG));
    }

    #[test]
    fn re_adding_a_rule_replaces_it() {
        let mut service = ConversionService::new();
        service.add_rule(Arc::new(TextLengthRule));
        service.add_rule(Arc::new(TextLengthRule));

        assert_eq!(service.len(), 1);
        assert_eq!(
            service.convert(Value::from("abc"), &native::LONG).unwrap(),
            Value::Int(3)
        );
    }

    #[test]
    fn catch_all_applies_through_the_hierarchy() {
        let service = ConversionService::with_defaults();
        let list = Value::from(Container::array_list([Value::from("a"), Value::from("b")]));

        assert!(service.can_convert(&native::ARRAY_LIST, &native::STRING));
        assert_eq!(
            service.convert(list, &native::STRING).unwrap(),
            Value::from("a")
        );
    }

    #[test]
    fn removing_a_pair_drops_its_rules() {
        let mut service = ConversionService::with_defaults();
        service.remove_rule(&native::COLLECTION, &native::OBJECT);

        assert!(service.is_empty());
        assert!(service.rules_for(&native::COLLECTION, &native::OBJECT).is_empty());
    }
}
