//! Front-end helpers shared by the binaries.
//!
//! This module provides URL validation, output rendering and the version
//! banner used by `unfurl` and `unfurld`.

pub mod output;
pub mod url;
pub mod version;

// Re-export public API
pub use output::{actual_depth, render_report, Report};
pub use url::{validate_scheme, UnsupportedScheme};
pub use version::{banner, default_user_agent, print_version};
