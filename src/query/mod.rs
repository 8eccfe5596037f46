pub mod query_description;
pub use query_description::*;

pub mod params;
pub use params::*;
