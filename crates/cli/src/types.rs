use collbridge_api::TypeDescriptor;
use collbridge_core::CustomCollections;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct TypeRow {
    #[tabled(rename = "Type")]
    name: String,
    #[tabled(rename = "Role")]
    role: &'static str,
    #[tabled(rename = "Pagination")]
    pagination: &'static str,
}

pub fn run(collections: &CustomCollections, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&collections.report())?);
        return Ok(());
    }

    let registrars = collections.registrar_ids();
    if registrars.is_empty() {
        println!("No collection registrars available.");
        return Ok(());
    }
    println!("Registrars: {}", registrars.join(", "));

    let pagination = collections.pagination_return_types();
    let flag = |ty: &TypeDescriptor| if pagination.contains(ty) { "yes" } else { "" };

    let rows: Vec<TypeRow> = collections
        .map_types()
        .iter()
        .map(|ty| TypeRow {
            name: ty.name().to_string(),
            role: "map",
            pagination: flag(ty),
        })
        .chain(collections.collection_types().iter().map(|ty| TypeRow {
            name: ty.name().to_string(),
            role: "collection",
            pagination: flag(ty),
        }))
        .collect();

    println!("{}", Table::new(rows));
    Ok(())
}
