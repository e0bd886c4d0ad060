use collbridge_api::{CollectionError, CollectionResult, Container, Elements, Value};
use collbridge_core::CustomCollections;
use serde_json::{Map, Value as Json, json};
use tracing::debug;

pub fn run(
    collections: &CustomCollections,
    type_name: &str,
    input: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let target = collections.lookup_type(type_name)?;
    let value = from_json(serde_json::from_str(input)?)?;
    let service = collbridge_runtime::conversion_service(collections);

    debug!("Converting {} into {}", value.runtime_type(), target);
    let converted = service.convert(value, &target)?;
    let output = json!({
        "type": converted.runtime_type().name(),
        "value": to_json(&converted),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Arrays become `ArrayList`s, objects `LinkedHashMap`s keyed by text.
fn from_json(json: Json) -> CollectionResult<Value> {
    Ok(match json {
        Json::Null => Value::Null,
        Json::Bool(value) => Value::Bool(value),
        Json::Number(number) => Value::Int(number.as_i64().ok_or_else(|| {
            CollectionError::InvalidArgument(format!(
                "Only integral numbers are supported: {number}"
            ))
        })?),
        Json::String(text) => Value::Text(text),
        Json::Array(items) => Container::array_list(
            items
                .into_iter()
                .map(from_json)
                .collect::<CollectionResult<Vec<_>>>()?,
        )
        .into(),
        Json::Object(entries) => Container::linked_hash_map(
            entries
                .into_iter()
                .map(|(key, value)| Ok((Value::Text(key), from_json(value)?)))
                .collect::<CollectionResult<Vec<_>>>()?,
        )
        .into(),
    })
}

fn to_json(value: &Value) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::Bool(value) => Json::Bool(*value),
        Value::Int(value) => json!(value),
        Value::Text(text) => Json::String(text.clone()),
        Value::Container(container) => match &container.elements {
            Elements::Map(entries) => {
                let keyed: Option<Map<String, Json>> = entries
                    .iter()
                    .map(|(key, value)| match key {
                        Value::Text(key) => Some((key.clone(), to_json(value))),
                        _ => None,
                    })
                    .collect();
                // Non-text keys are rendered as [key, value] pairs.
                keyed.map(Json::Object).unwrap_or_else(|| {
                    Json::Array(
                        entries
                            .iter()
                            .map(|(key, value)| json!([to_json(key), to_json(value)]))
                            .collect(),
                    )
                })
            }
            elements => Json::Array(elements.iter_items().map(to_json).collect()),
        },
    }
}
