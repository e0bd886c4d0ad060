pub mod classifier;
pub mod config;
pub mod conversion;
pub mod error;
pub mod logging;
pub mod registry;

pub use classifier::SearchableTypes;
pub use config::RegistryConfig;
pub use conversion::ConversionService;
pub use error::{BridgeError, Result};
pub use registry::{CustomCollections, CustomCollectionsBuilder};
