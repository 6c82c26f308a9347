//! Error handling.
//!
//! This module provides:
//! - The trace and initialization error types
//! - Categorization of transport failures
//!
//! Only configuration and fetch failures are errors. A malformed meta-refresh
//! tag or an unexpected content type is simply "no redirect found".

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{FetchErrorKind, InitializationError, TraceError};
