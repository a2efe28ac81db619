// Module declarations
pub mod config;
pub mod generation;
pub mod models;
pub mod parsers;
pub mod server;
pub mod shutdown;
pub mod templates;

pub use models::*;
