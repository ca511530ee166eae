//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`TabKind`], [`TabEntry`], [`TabMap`] - Open-tab bookkeeping
//! - [`ContentEntry`], [`FileModel`] - Contents API wire models
//! - [`KernelSpec`], [`KernelSpecsResponse`] - Kernelspecs API wire models
//! - [`TerminalFrame`], [`TerminalModel`] - Terminal wire protocol
//! - [`Route`] - Hash-based navigation

mod contents;
mod kernelspec;
mod route;
mod tabs;
mod terminal;

pub use contents::{ContentEntry, ContentType, DirectoryListing, FileModel};
pub use kernelspec::{KernelSpec, KernelSpecFile, KernelSpecsResponse};
pub use route::Route;
pub use tabs::{TabEntry, TabKind, TabMap};
pub use terminal::{TerminalFrame, TerminalModel};
