//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`lab`] - The Lab shell: navigation, file browser, tabs, content
//! - [`navigation`] - Side panel buttons for future panels
//! - [`file_browser`] - Workspace directory listing
//! - [`tab_strip`] - Open-tab strip with focus/close actions
//! - [`content`] - Per-tab content panel
//! - [`editor`] - File editor tab
//! - [`launcher`] - Kernelspec/terminal launcher tab
//! - [`terminal`] - Terminal tab with its WebSocket bridge
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod content;
pub mod editor;
pub mod file_browser;
pub mod icons;
pub mod lab;
pub mod launcher;
pub mod navigation;
pub mod router;
pub mod tab_strip;
pub mod terminal;

pub use router::AppRouter;
