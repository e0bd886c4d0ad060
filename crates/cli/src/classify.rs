use collbridge_core::CustomCollections;

pub fn run(
    collections: &CustomCollections,
    type_name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let ty = collections.lookup_type(type_name)?;
    let classification = collections.classify(&ty);

    println!("Type:        {}", classification.type_name);
    println!("Custom:      {}", classification.is_custom);
    println!("Map:         {}", classification.is_map);
    println!("Collection:  {}", classification.is_collection);
    if let Some(base) = &classification.map_base_type {
        println!("Map base:    {}", base);
    }
    Ok(())
}
