//! Common utilities and types for lingup

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{LingupError, Result};
pub use logging::init_logging;
