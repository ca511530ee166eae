//! Utility modules for web, DOM, and data structure operations.
//!
//! Provides:
//! - [`Scrollback`] - Bounded terminal scrollback with stable chunk ids
//! - [`cache`] - sessionStorage JSON caching
//! - [`dom`] - Safe browser API access
//! - [`format`] - Path and label formatting helpers

pub mod cache;
pub mod dom;
pub mod format;
mod scrollback;

pub use scrollback::{Chunk, Scrollback};
