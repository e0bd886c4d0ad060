use collbridge_api::{RegistryReport, TypeClassification};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("Registry report (collbridge types --json):");
    let report = schemars::schema_for!(RegistryReport);
    println!("{}", serde_json::to_string_pretty(&report)?);

    println!("\nType classification:");
    let classification = schemars::schema_for!(TypeClassification);
    println!("{}", serde_json::to_string_pretty(&classification)?);
    Ok(())
}
