//! Backend client layer.
//!
//! Thin async wrappers over the Zasper server's REST and WebSocket
//! endpoints:
//! - [`contents`] - File and directory operations
//! - [`kernelspecs`] - Kernel specification listing
//! - [`terminals`] - Terminal session management and socket bridge
//!
//! All REST calls go through [`http`], which adds a timeout to every
//! request via `Promise.race`.

pub mod contents;
pub mod error;
pub mod http;
pub mod kernelspecs;
pub mod terminals;

pub use error::{ApiError, SocketError};
