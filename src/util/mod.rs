//! Utility modules for vladmake

pub mod logging;

pub use logging::{init_logging, LoggingConfig};
