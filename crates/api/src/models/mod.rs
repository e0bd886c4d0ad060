pub mod native;
pub mod report;
pub mod types;
pub mod value;

pub use report::*;
pub use types::*;
pub use value::*;
