//! Main application modules.
//!
//! This module provides URL normalization and result rendering used by the
//! library API and the CLI.

pub mod output;
pub mod url;

// Re-export public API
pub use output::write_outcome;
pub use url::normalize_target;
