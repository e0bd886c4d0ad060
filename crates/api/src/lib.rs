pub mod conversion;
pub mod error;
pub mod models;
pub mod registrar;

pub use conversion::{ConversionRule, ConversionRulePtr, ConverterRegistry, ConvertiblePair};
pub use error::{CollectionError, CollectionResult};
pub use models::*;
pub use registrar::{CollectionRegistrar, CollectionRegistrarPtr, Unwrapper};
