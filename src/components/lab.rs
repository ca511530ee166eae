//! The Lab shell.
//!
//! Container component laying out the workspace: navigation rail and
//! file browser on the left, tab strip and content panel on the right.
//! All tab state lives in the [`AppContext`] provided at the root.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::content::ContentPanel;
use crate::components::file_browser::FileBrowser;
use crate::components::navigation::NavigationPanel;
use crate::components::tab_strip::TabStrip;

stylance::import_crate_style!(css, "src/components/lab.module.css");

/// Workspace shell component.
#[component]
pub fn Lab() -> impl IntoView {
    // Looked up here once so a missing provider fails loudly at mount.
    let _ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    view! {
        <div class=css::lab>
            <div class=css::sidebar>
                <NavigationPanel />
                <FileBrowser />
            </div>
            <div class=css::main>
                <TabStrip />
                <ContentPanel />
            </div>
        </div>
    }
}
