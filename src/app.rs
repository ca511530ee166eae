//! Root application module.
//!
//! Contains the main App component, AppContext definition, TabsState,
//! and application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::models::{TabKind, TabMap};

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// TabsState
// ============================================================================

/// Open-tab state managed with Leptos signals.
///
/// Wraps a [`TabMap`] in a signal and exposes the workspace actions the
/// panels dispatch: open, focus, close, rename. All invariant logic
/// (single visible tab, unique keys) lives in [`TabMap`] itself so it can
/// be tested without a browser.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct TabsState {
    /// The open-tab map. Seeded with the launcher tab.
    pub map: RwSignal<TabMap>,
    /// Counter backing locally-generated terminal tab names.
    terminal_seq: StoredValue<usize>,
}

impl TabsState {
    /// Creates the tab state with the launcher tab open and visible.
    pub fn new() -> Self {
        Self {
            map: RwSignal::new(TabMap::with_launcher()),
            terminal_seq: StoredValue::new(0),
        }
    }

    /// Opens (or re-focuses) a file tab for `path`.
    ///
    /// The display name is the backend path, which is unique per file.
    pub fn open_file(&self, path: &str) {
        let path = path.to_string();
        self.map
            .update(|m| m.open(&path, TabKind::File, path.clone()));
    }

    /// Opens (or re-focuses) the launcher tab.
    pub fn open_launcher(&self) {
        self.map
            .update(|m| m.open(crate::config::LAUNCHER_TAB_NAME, TabKind::Launcher, ""));
    }

    /// Opens a terminal tab bound to the backend session `session`.
    ///
    /// Returns the tab's display name.
    pub fn open_terminal(&self, session: &str) -> String {
        let name = format!("Terminal {}", session);
        self.map
            .update(|m| m.open(&name, TabKind::Terminal, session));
        name
    }

    /// Produces a locally-unique terminal session name.
    ///
    /// Used when `POST /api/terminals` succeeds without returning a name.
    pub fn next_terminal_id(&self) -> String {
        let seq = self.terminal_seq.get_value() + 1;
        self.terminal_seq.set_value(seq);
        seq.to_string()
    }

    /// Makes `name` the visible tab.
    pub fn focus(&self, name: &str) {
        self.map.update(|m| {
            m.focus(name);
        });
    }

    /// Closes `name`, handing visibility to the most recent remaining tab.
    pub fn close(&self, name: &str) {
        self.map.update(|m| {
            m.close(name);
        });
    }

    /// Clears the one-shot initial-load flag for `name`.
    pub fn mark_loaded(&self, name: &str) {
        self.map.update(|m| m.mark_loaded(name));
    }

    /// Re-keys a file tab after a backend rename.
    ///
    /// Returns `false` if the new name collides with an open tab.
    pub fn rename_file(&self, name: &str, new_path: &str) -> bool {
        let mut ok = false;
        let new_path = new_path.to_string();
        self.map
            .update(|m| ok = m.rename(name, &new_path, new_path.clone()));
        ok
    }
}

impl Default for TabsState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// The [`AppContext`] separates concerns into independent domains:
/// - **Tab state**: the open-tab map and the workspace actions on it
/// - **Browser epoch**: bumped to make the file browser re-fetch its listing
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Open-tab state (the single invariant-bearing piece of UI state).
    pub tabs: TabsState,

    /// Listing refresh epoch. Components that mutate the contents API bump
    /// this; the file browser tracks it and re-fetches.
    pub browser_epoch: RwSignal<u32>,
}

impl AppContext {
    /// Creates a new application context with default state.
    pub fn new() -> Self {
        Self {
            tabs: TabsState::new(),
            browser_epoch: RwSignal::new(0),
        }
    }

    /// Asks the file browser to re-fetch the directory listing.
    pub fn refresh_browser(&self) {
        self.browser_epoch.update(|e| *e = e.wrapping_add(1));
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// App Component
// ============================================================================

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router (which mounts the Lab shell)
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::errorScreen>
                    <div class=css::errorBox>
                        <h1 class=css::errorTitle>"Something went wrong"</h1>
                        <p>"An unexpected error occurred. Please try reloading the page."</p>
                        <ul class=css::errorList>
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            class=css::reloadButton
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
