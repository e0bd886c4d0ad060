mod classify;
mod convert;
mod schema;
mod types;

use clap::{Parser, Subcommand};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "collbridge",
    version,
    about = "Inspect the custom collection registry",
    long_about = "collbridge reports which third-party collection and map types are registered, \
                  how a given type is classified, and how values convert between native and \
                  custom collections."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List registrars and the types they contribute
    Types {
        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show whether a type is map-like or collection-like
    Classify {
        /// Fully qualified type name, e.g. io.vavr.collection.HashMap
        #[arg(value_name = "TYPE")]
        type_name: String,
    },
    /// Convert a JSON array or object into the given type
    #[command(
        long_about = "Reads the JSON value as a native collection (arrays become \
                      java.util.ArrayList, objects become java.util.LinkedHashMap) and converts \
                      it into TYPE using the installed conversion rules."
    )]
    Convert {
        #[arg(value_name = "TYPE")]
        type_name: String,
        #[arg(value_name = "JSON")]
        json: String,
    },
    /// Print the JSON schema of the report formats
    Schema,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = collbridge_runtime::init_logging("cli", false);

    let collections = collbridge_runtime::custom_collections()?;
    debug!(
        "Registry loaded with registrars: {}",
        collections.registrar_ids().join(", ")
    );

    match cli.command {
        Commands::Types { json } => types::run(collections, json),
        Commands::Classify { type_name } => classify::run(collections, &type_name),
        Commands::Convert { type_name, json } => convert::run(collections, &type_name, &json),
        Commands::Schema => schema::run(),
    }
}
