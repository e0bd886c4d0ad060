use collbridge_api::{
    CollectionError, CollectionRegistrar, CollectionRegistrarPtr, CollectionResult,
    ConversionRule, ConverterRegistry, ConvertiblePair, TypeDescriptor, Unwrapper, Value, native,
};
use collbridge_core::{ConversionService, CustomCollections};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

struct MockRegistrar {
    id: &'static str,
    available: bool,
    map_types: Vec<TypeDescriptor>,
    collection_types: Vec<TypeDescriptor>,
    pagination_types: Vec<TypeDescriptor>,
    installs: Arc<AtomicUsize>,
}

impl MockRegistrar {
    fn new(id: &'static str) -> Self {
        Self {
            id,
            available: true,
            map_types: vec![],
            collection_types: vec![],
            pagination_types: vec![],
            installs: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    fn maps(mut self, types: &[&TypeDescriptor]) -> Self {
        self.map_types = types.iter().map(|t| (*t).clone()).collect();
        self
    }

    fn collections(mut self, types: &[&TypeDescriptor]) -> Self {
        self.collection_types = types.iter().map(|t| (*t).clone()).collect();
        self
    }

    fn pagination(mut self, types: &[&TypeDescriptor]) -> Self {
        self.pagination_types = types.iter().map(|t| (*t).clone()).collect();
        self
    }

    fn shared(self) -> CollectionRegistrarPtr {
        Arc::new(self)
    }
}

struct MarkerRule(&'static str);

impl ConversionRule for MarkerRule {
    fn id(&self) -> &'static str {
        self.0
    }

    fn convertible_pairs(&self) -> Vec<ConvertiblePair> {
        vec![ConvertiblePair::new(
            native::COLLECTION.clone(),
            native::STRING.clone(),
        )]
    }

    fn convert(
        &self,
        _value: Value,
        _source: &TypeDescriptor,
        _target: &TypeDescriptor,
    ) -> CollectionResult<Value> {
        Ok(Value::from(self.0))
    }
}

impl CollectionRegistrar for MockRegistrar {
    fn id(&self) -> &str {
        self.id
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn map_types(&self) -> Vec<TypeDescriptor> {
        self.map_types.clone()
    }

    fn collection_types(&self) -> Vec<TypeDescriptor> {
        self.collection_types.clone()
    }

    fn pagination_return_types(&self) -> Vec<TypeDescriptor> {
        self.pagination_types.clone()
    }

    fn unwrapper(&self) -> Unwrapper {
        let id = self.id;
        Unwrapper::new(id, move |value| match value {
            Value::Text(text) if text == id => Ok(Value::Int(1)),
            other => Ok(other),
        })
    }

    fn install_converters(&self, registry: &mut dyn ConverterRegistry) {
        self.installs.fetch_add(1, Ordering::SeqCst);
        registry.add_rule(Arc::new(MarkerRule(self.id)));
    }
}

fn iterable(name: &str) -> TypeDescriptor {
    TypeDescriptor::interface(name, vec![native::ITERABLE.clone()]).unwrap()
}

fn subtype(name: &str, parents: &[&TypeDescriptor]) -> TypeDescriptor {
    TypeDescriptor::class(name, parents.iter().map(|t| (*t).clone()).collect()).unwrap()
}

#[test]
fn registered_types_are_classified_by_partition() {
    let bag = iterable("com.example.Bag");
    let dict = iterable("com.example.Dict");
    let hash_dict = subtype("com.example.HashDict", &[&dict]);

    let collections = CustomCollections::builder()
        .registrar(
            MockRegistrar::new("example")
                .collections(&[&bag])
                .maps(&[&dict])
                .shared(),
        )
        .build()
        .unwrap();

    assert!(collections.is_collection(&bag));
    assert!(!collections.is_map(&bag));
    assert!(collections.is_map(&dict));
    assert!(!collections.is_collection(&dict));

    assert!(collections.is_map(&hash_dict));
    assert_eq!(collections.map_base_type(&hash_dict).unwrap(), dict);
    assert_eq!(collections.map_base_type(&native::HASH_MAP).unwrap(), *native::MAP);

    assert_eq!(collections.custom_types().len(), 2);
    assert_eq!(collections.map_types().len(), 1);
    assert_eq!(collections.collection_types().len(), 1);
}

#[test]
fn unrelated_types_have_no_map_base_type() {
    let collections = CustomCollections::builder().build().unwrap();

    assert!(!collections.is_map(&native::STRING));
    assert!(!collections.is_collection(&native::STRING));
    let err = collections.map_base_type(&native::STRING).unwrap_err();
    assert!(matches!(err, CollectionError::NoMatchingBaseType { .. }));
}

#[test]
fn unavailable_registrars_contribute_nothing() {
    let bag = iterable("com.example.Bag");
    let collections = CustomCollections::from_registrars([
        MockRegistrar::new("missing")
            .unavailable()
            .collections(&[&bag])
            .pagination(&[&bag])
            .shared(),
    ])
    .unwrap();

    assert!(collections.registrar_ids().is_empty());
    assert!(collections.custom_types().is_empty());
    assert!(collections.pagination_return_types().is_empty());
    assert!(collections.unwrappers().is_empty());
    assert!(!collections.is_collection(&bag));
}

#[test]
fn overlapping_registrars_do_not_break_initialisation() {
    let sized = iterable("com.example.Sized");
    let bag = subtype("com.example.Bag", &[&sized]);
    let stack = subtype("com.example.Stack", &[&sized]);

    let collections = CustomCollections::from_registrars([
        MockRegistrar::new("first").collections(&[&sized, &bag]).shared(),
        MockRegistrar::new("second").collections(&[&sized, &stack]).shared(),
    ])
    .unwrap();

    assert_eq!(collections.collection_types().len(), 3);
    assert!(collections.is_collection(&bag));
    assert!(collections.is_collection(&stack));
    assert!(collections.is_collection(&sized));
    assert_eq!(collections.unwrappers().len(), 2);
}

#[test]
fn a_type_cannot_be_both_map_and_collection() {
    let hybrid = iterable("com.example.Hybrid");

    let result = CustomCollections::from_registrars([
        MockRegistrar::new("maps").maps(&[&hybrid]).shared(),
        MockRegistrar::new("collections").collections(&[&hybrid]).shared(),
    ]);

    assert!(matches!(result, Err(CollectionError::InvalidArgument(_))));
}

#[test]
fn pagination_types_are_independent_of_partitions() {
    let bag = iterable("com.example.Bag");
    let page = iterable("com.example.Page");

    let collections = CustomCollections::from_registrars([MockRegistrar::new("example")
        .collections(&[&bag])
        .pagination(&[&bag, &page])
        .shared()])
    .unwrap();

    let pagination: Vec<_> = collections.pagination_return_types().iter().cloned().collect();
    assert_eq!(pagination, vec![bag, page.clone()]);
    assert!(!collections.custom_types().contains(&page));
}

#[test]
fn unwrappers_run_in_registration_order() {
    let collections = CustomCollections::from_registrars([
        MockRegistrar::new("first").shared(),
        MockRegistrar::new("second").shared(),
    ])
    .unwrap();

    let ids: Vec<_> = collections.unwrappers().iter().map(|u| u.registrar()).collect();
    assert_eq!(ids, vec!["first", "second"]);
    assert_eq!(
        collections.unwrap_to_native(Value::from("second")).unwrap(),
        Value::Int(1)
    );
    assert_eq!(
        collections.unwrap_to_native(Value::from("other")).unwrap(),
        Value::from("other")
    );
}

#[test]
fn install_conversions_removes_the_catch_all_rule() {
    let registrar = MockRegistrar::new("example");
    let installs = registrar.installs.clone();
    let collections = CustomCollections::from_registrars([registrar.shared()]).unwrap();
    let mut service = ConversionService::with_defaults();

    assert_eq!(
        service.rules_for(&native::COLLECTION, &native::OBJECT),
        vec!["collection-to-object"]
    );

    collections.install_conversions(&mut service);

    assert!(service.rules_for(&native::COLLECTION, &native::OBJECT).is_empty());
    assert_eq!(
        service.rules_for(&native::COLLECTION, &native::STRING),
        vec!["example"]
    );
    assert_eq!(installs.load(Ordering::SeqCst), 1);
}

#[test]
fn installing_conversions_twice_is_harmless() {
    let collections =
        CustomCollections::from_registrars([MockRegistrar::new("example").shared()]).unwrap();
    let mut service = ConversionService::with_defaults();

    collections.install_conversions(&mut service);
    collections.install_conversions(&mut service);

    assert_eq!(service.len(), 1);
    let list = Value::from(collbridge_api::Container::array_list([Value::from(1)]));
    assert_eq!(
        service.convert(list, &native::STRING).unwrap(),
        Value::from("example")
    );
}

#[test]
fn lookup_covers_native_and_declared_types() {
    let bag = iterable("com.example.Bag");
    let registrar = MockRegistrar::new("example").collections(&[&bag]).shared();
    let collections = CustomCollections::from_registrars([registrar]).unwrap();

    assert_eq!(collections.lookup_type("java.util.List").unwrap(), *native::LIST);
    assert_eq!(collections.lookup_type(" com.example.Bag ").unwrap(), bag);
    assert!(matches!(
        collections.lookup_type("com.example.Missing"),
        Err(CollectionError::InvalidArgument(_))
    ));

    let classification = collections.classify(&native::HASH_MAP);
    assert!(classification.is_map);
    assert!(!classification.is_custom);
    assert_eq!(classification.map_base_type.as_deref(), Some("java.util.Map"));

    let report = collections.report();
    assert_eq!(report.registrars, vec!["example".to_string()]);
    assert_eq!(report.collection_types, vec!["com.example.Bag".to_string()]);
}

#[test]
fn global_instance_is_published_once() {
    let built = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let built = built.clone();
            std::thread::spawn(move || {
                CustomCollections::global_or_try_init(|| {
                    built.fetch_add(1, Ordering::SeqCst);
                    CustomCollections::from_registrars([MockRegistrar::new("global").shared()])
                })
                .map(|collections| collections as *const CustomCollections as usize)
                .unwrap()
            })
        })
        .collect();

    let addresses: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(built.load(Ordering::SeqCst), 1);

    let global = CustomCollections::global().unwrap();
    assert_eq!(global.registrar_ids(), vec!["global"]);

    let rejected = CustomCollections::install_global(CustomCollections::builder().build().unwrap());
    assert!(rejected.is_err());
}
