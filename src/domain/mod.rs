//! Domain types: records and the data source contract.

pub mod record;
pub mod source;

pub use record::Record;
pub use source::{DocumentSource, StoreError};
