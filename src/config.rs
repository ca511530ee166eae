//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the shell.
pub const APP_NAME: &str = "Zasper";

// =============================================================================
// Backend Configuration
// =============================================================================

/// Base URL of the Zasper backend server (REST).
pub const API_BASE_URL: &str = "http://localhost:8888";

/// Base URL of the Zasper backend server (WebSocket).
pub const WS_BASE_URL: &str = "ws://localhost:8888";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Workspace Configuration
// =============================================================================

/// Display name of the launcher tab seeded into every workspace.
pub const LAUNCHER_TAB_NAME: &str = "Launcher";

/// Extension used when creating a new file from the browser header.
pub const NEW_FILE_EXT: &str = ".py";

/// Path used when creating a new directory from the browser header.
pub const NEW_DIRECTORY_NAME: &str = "untitled";

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Maximum number of output chunks kept in a terminal's scrollback.
pub const MAX_TERMINAL_SCROLLBACK: usize = 1000;

/// Greeting written locally when a terminal socket opens.
pub const TERMINAL_GREETING: &str = "Welcome to Zasper!\r\n";

// =============================================================================
// Cache Configuration
// =============================================================================

/// Session cache configuration.
pub mod cache {
    /// sessionStorage key for the kernelspec listing.
    pub const KERNELSPECS_KEY: &str = "kernelspecs_cache";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
