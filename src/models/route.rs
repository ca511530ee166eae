//! Hash-based routing.
//!
//! The client has a single route: the Lab shell at the root path. Any
//! unknown hash normalizes back to it, so stale bookmarks still load.

/// Application routes.
#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    /// The Lab shell: #/ or empty hash.
    Lab,
}

impl Route {
    /// Parse a URL hash into a Route.
    pub fn from_hash(_hash: &str) -> Self {
        // Single-route application: everything is the Lab.
        Self::Lab
    }

    /// Convert the route to its URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Lab => "#/".to_string(),
        }
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }

    /// Rewrite the browser URL to this route's canonical hash without
    /// adding a history entry.
    pub fn replace(&self) {
        if let Some(window) = web_sys::window()
            && let Ok(history) = window.history()
        {
            let _ = history.replace_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(&self.to_hash()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_hash_is_the_lab() {
        assert_eq!(Route::from_hash(""), Route::Lab);
        assert_eq!(Route::from_hash("#"), Route::Lab);
        assert_eq!(Route::from_hash("#/"), Route::Lab);
        assert_eq!(Route::from_hash("#/stale/bookmark.py"), Route::Lab);
    }

    #[test]
    fn test_canonical_hash() {
        assert_eq!(Route::Lab.to_hash(), "#/");
    }
}
