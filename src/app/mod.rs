pub mod database_service;

pub use database_service::DatabaseService;
