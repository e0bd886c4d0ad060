mod defaults;
mod service;

pub use defaults::CollectionToObjectRule;
pub use service::ConversionService;
