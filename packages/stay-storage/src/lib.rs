pub mod catalog;
pub mod filter;

mod error;

pub use catalog::Catalog;
pub use error::Error;
pub use filter::FilterSpec;

pub type Result<T, E = Error> = std::result::Result<T, E>;
