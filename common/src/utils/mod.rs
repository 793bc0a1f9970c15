//! Utility functions and helpers.

pub mod redact;

// Re-export commonly used types
pub use redact::scrub_secret;
