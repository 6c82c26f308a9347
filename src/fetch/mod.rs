//! Redirect tracing.
//!
//! - `request`: headers sent on every hop
//! - `snapshot`: header and capped body capture
//! - `meta_refresh`: the meta-refresh pattern
//! - `redirects`: the tracer loop and `Requester`

mod meta_refresh;
mod redirects;
mod request;
mod snapshot;


pub use meta_refresh::extract_meta_refresh;
pub use redirects::{trace, RedirectSignal, Requester};
