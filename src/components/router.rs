//! Application router component.
//!
//! The client serves a single route: the Lab shell at the root path.
//! Hash changes are still listened for so that a stray navigation (or a
//! stale bookmark with an old-style hash) normalizes back to `#/`
//! without remounting the shell.

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::lab::Lab;
use crate::models::Route;

/// Main application router.
///
/// The Lab shell is always mounted; routing only keeps the URL hash
/// canonical.
#[component]
pub fn AppRouter() -> impl IntoView {
    // Normalize whatever hash we were opened with.
    Route::current().replace();

    // Keep the hash canonical on hashchange (runs once on mount).
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            Route::current().replace();
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    view! { <Lab /> }
}
