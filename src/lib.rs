pub mod app;
pub mod domain;
pub mod infra;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::DatabaseService;
pub use domain::{DocumentSource, Record, StoreError};
pub use infra::config::{ConfigError, Settings};
