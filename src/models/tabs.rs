//! Open-tab bookkeeping for the workspace.
//!
//! The tab map is the one piece of state the shell owns itself rather than
//! delegating to the backend, and it carries the single invariant of the
//! UI: at most one tab is visible at any time.

use crate::config::LAUNCHER_TAB_NAME;

/// What a tab renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabKind {
    /// A file editor over a backend path.
    File,
    /// The kernelspec/terminal launcher.
    Launcher,
    /// A terminal bound to a backend session.
    Terminal,
}

/// A single open tab.
#[derive(Clone, Debug, PartialEq)]
pub struct TabEntry {
    /// What the tab renders.
    pub kind: TabKind,
    /// Backend path for file tabs, session name for terminal tabs,
    /// empty for the launcher.
    pub path: String,
    /// Unique key and strip label.
    pub display_name: String,
    /// Whether this tab is the one shown in the content panel.
    pub visible: bool,
    /// One-shot flag: the tab's panel must fetch its content before
    /// first render. Cleared via [`TabMap::mark_loaded`].
    pub needs_initial_load: bool,
}

/// The open-tab map: `display_name` → [`TabEntry`], unique keys.
///
/// Entries are stored in insertion order so the tab strip renders
/// stably, but no ordering is part of the contract.
///
/// Invariant: at most one entry has `visible == true`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TabMap {
    entries: Vec<TabEntry>,
}

impl TabMap {
    /// Creates an empty tab map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tab map seeded with the launcher tab, visible.
    ///
    /// The launcher needs no initial content load: it fetches the
    /// kernelspec listing itself every time it mounts.
    pub fn with_launcher() -> Self {
        let mut map = Self::new();
        map.entries.push(TabEntry {
            kind: TabKind::Launcher,
            path: String::new(),
            display_name: LAUNCHER_TAB_NAME.to_string(),
            visible: true,
            needs_initial_load: false,
        });
        map
    }

    /// Number of open tabs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no tabs are open.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[TabEntry] {
        &self.entries
    }

    /// Looks up a tab by display name.
    pub fn get(&self, name: &str) -> Option<&TabEntry> {
        self.entries.iter().find(|e| e.display_name == name)
    }

    /// The currently visible tab, if any.
    pub fn visible(&self) -> Option<&TabEntry> {
        self.entries.iter().find(|e| e.visible)
    }

    /// Opens a tab.
    ///
    /// If `name` is already open, it only becomes visible: its `kind`,
    /// `path`, and loaded content are untouched. Otherwise a new entry is
    /// inserted, visible and flagged for its initial content load.
    pub fn open(&mut self, name: &str, kind: TabKind, path: impl Into<String>) {
        if self.get(name).is_some() {
            self.focus(name);
            return;
        }
        self.hide_all();
        self.entries.push(TabEntry {
            kind,
            path: path.into(),
            display_name: name.to_string(),
            visible: true,
            needs_initial_load: true,
        });
    }

    /// Makes `name` the visible tab. Returns `false` if it is not open.
    pub fn focus(&mut self, name: &str) -> bool {
        if self.get(name).is_none() {
            return false;
        }
        for entry in &mut self.entries {
            entry.visible = entry.display_name == name;
        }
        true
    }

    /// Closes `name`. Returns `false` if it is not open.
    ///
    /// If the closed tab was visible, the most recently opened remaining
    /// tab becomes visible instead.
    pub fn close(&mut self, name: &str) -> bool {
        let Some(idx) = self.entries.iter().position(|e| e.display_name == name) else {
            return false;
        };
        let was_visible = self.entries[idx].visible;
        self.entries.remove(idx);
        if was_visible && let Some(last) = self.entries.last_mut() {
            last.visible = true;
        }
        true
    }

    /// Clears the one-shot initial-load flag for `name`.
    pub fn mark_loaded(&mut self, name: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.display_name == name) {
            entry.needs_initial_load = false;
        }
    }

    /// Re-keys a tab after a backend rename.
    ///
    /// Refuses a rename that would collide with another open tab. The
    /// renamed tab is flagged for a fresh content load, since its panel
    /// remounts under the new key.
    pub fn rename(&mut self, name: &str, new_name: &str, new_path: impl Into<String>) -> bool {
        if new_name == name {
            return true;
        }
        if self.get(new_name).is_some() {
            return false;
        }
        let Some(entry) = self.entries.iter_mut().find(|e| e.display_name == name) else {
            return false;
        };
        entry.display_name = new_name.to_string();
        entry.path = new_path.into();
        entry.needs_initial_load = true;
        true
    }

    fn hide_all(&mut self) {
        for entry in &mut self.entries {
            entry.visible = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_count(map: &TabMap) -> usize {
        map.entries().iter().filter(|e| e.visible).count()
    }

    #[test]
    fn test_seeded_launcher_is_visible() {
        let map = TabMap::with_launcher();
        assert_eq!(map.len(), 1);
        let launcher = map.visible().expect("launcher should be visible");
        assert_eq!(launcher.kind, TabKind::Launcher);
        assert_eq!(launcher.display_name, LAUNCHER_TAB_NAME);
        assert!(!launcher.needs_initial_load);
    }

    #[test]
    fn test_open_new_tab_takes_visibility() {
        let mut map = TabMap::with_launcher();
        map.open("src/train.py", TabKind::File, "src/train.py");

        assert_eq!(map.len(), 2);
        assert_eq!(visible_count(&map), 1);
        let entry = map.visible().unwrap();
        assert_eq!(entry.display_name, "src/train.py");
        assert!(entry.needs_initial_load);
        assert!(!map.get(LAUNCHER_TAB_NAME).unwrap().visible);
    }

    #[test]
    fn test_reopen_changes_only_visibility() {
        let mut map = TabMap::with_launcher();
        map.open("notes.md", TabKind::File, "notes.md");
        map.mark_loaded("notes.md");
        map.open("Terminal 1", TabKind::Terminal, "1");

        // Re-open the file tab under the same name but different arguments;
        // stored kind/path must win.
        map.open("notes.md", TabKind::Terminal, "bogus");

        let entry = map.get("notes.md").unwrap();
        assert!(entry.visible);
        assert_eq!(entry.kind, TabKind::File);
        assert_eq!(entry.path, "notes.md");
        assert!(!entry.needs_initial_load, "re-open must not trigger a re-fetch");
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_focus_switches_visibility() {
        let mut map = TabMap::with_launcher();
        map.open("a.py", TabKind::File, "a.py");
        map.open("b.py", TabKind::File, "b.py");

        assert!(map.focus("a.py"));
        assert_eq!(map.visible().unwrap().display_name, "a.py");
        assert_eq!(visible_count(&map), 1);

        assert!(!map.focus("missing.py"));
        assert_eq!(map.visible().unwrap().display_name, "a.py");
    }

    #[test]
    fn test_close_hidden_tab_keeps_visible_tab() {
        let mut map = TabMap::with_launcher();
        map.open("a.py", TabKind::File, "a.py");
        map.open("b.py", TabKind::File, "b.py");

        assert!(map.close("a.py"));
        assert_eq!(map.visible().unwrap().display_name, "b.py");
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_close_visible_tab_hands_off_visibility() {
        let mut map = TabMap::with_launcher();
        map.open("a.py", TabKind::File, "a.py");
        map.open("b.py", TabKind::File, "b.py");

        assert!(map.close("b.py"));
        assert_eq!(visible_count(&map), 1);
        assert_eq!(map.visible().unwrap().display_name, "a.py");
    }

    #[test]
    fn test_close_last_tab_leaves_empty_map() {
        let mut map = TabMap::new();
        map.open("only.py", TabKind::File, "only.py");
        assert!(map.close("only.py"));
        assert!(map.is_empty());
        assert!(map.visible().is_none());
        assert!(!map.close("only.py"));
    }

    #[test]
    fn test_rename_rekeys_and_flags_reload() {
        let mut map = TabMap::with_launcher();
        map.open("untitled.py", TabKind::File, "untitled.py");
        map.mark_loaded("untitled.py");

        assert!(map.rename("untitled.py", "model.py", "model.py"));
        assert!(map.get("untitled.py").is_none());
        let entry = map.get("model.py").unwrap();
        assert_eq!(entry.path, "model.py");
        assert!(entry.needs_initial_load);
    }

    #[test]
    fn test_rename_refuses_collision() {
        let mut map = TabMap::with_launcher();
        map.open("a.py", TabKind::File, "a.py");
        map.open("b.py", TabKind::File, "b.py");

        assert!(!map.rename("a.py", "b.py", "b.py"));
        assert!(map.get("a.py").is_some());
    }

    // Every sequence of open/focus/close actions leaves exactly one
    // visible tab once at least one tab exists.
    #[test]
    fn test_single_visible_across_action_sequences() {
        let mut map = TabMap::with_launcher();
        let actions: &[(&str, &str)] = &[
            ("open", "a.py"),
            ("open", "b.py"),
            ("focus", "a.py"),
            ("open", "Terminal 1"),
            ("close", "a.py"),
            ("focus", "Launcher"),
            ("open", "b.py"),
            ("close", "b.py"),
            ("close", "Terminal 1"),
            ("close", "Launcher"),
            ("open", "c.py"),
        ];
        for (action, name) in actions {
            match *action {
                "open" => map.open(name, TabKind::File, *name),
                "focus" => {
                    map.focus(name);
                }
                "close" => {
                    map.close(name);
                }
                _ => unreachable!(),
            }
            if !map.is_empty() {
                assert_eq!(visible_count(&map), 1, "after {} {}", action, name);
            }
        }
    }
}
