pub mod config;
pub mod errors;

pub use config::{AppConfig, CleaningOptions, IoConfig, LoggingConfig};
pub use errors::{MineCleanerError, Result};
