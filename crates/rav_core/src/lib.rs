// Shared plumbing for the document generators: configuration, errors, logging.

pub mod config;
pub mod error;
pub mod logging;

pub use config::GeneratorConfig;
pub use error::RavError;
