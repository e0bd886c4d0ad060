use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Snapshot of what the registrars contributed, as reported to tooling.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct RegistryReport {
    pub registrars: Vec<String>,
    pub map_types: Vec<String>,
    pub collection_types: Vec<String>,
    pub pagination_return_types: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct TypeClassification {
    pub type_name: String,
    pub is_custom: bool,
    pub is_map: bool,
    pub is_collection: bool,
    /// Present only for map-like types.
    pub map_base_type: Option<String>,
}
