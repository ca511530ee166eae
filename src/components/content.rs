//! Content panel.
//!
//! Renders one wrapper per open tab and shows only the visible one.
//! Hidden tabs stay mounted so editor buffers and terminal sessions
//! survive tab switches; closing a tab unmounts its panel and releases
//! its resources.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::editor::EditorTab;
use crate::components::launcher::LauncherTab;
use crate::components::terminal::TerminalTab;
use crate::models::{TabEntry, TabKind};

stylance::import_crate_style!(css, "src/components/content.module.css");

#[component]
pub fn ContentPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let tabs = Signal::derive(move || ctx.tabs.map.with(|m| m.entries().to_vec()));

    view! {
        <div class=css::panel>
            <For
                each=move || tabs.get()
                key=|entry: &TabEntry| entry.display_name.clone()
                children=|entry| view! { <TabBody entry=entry /> }
            />
        </div>
    }
}

/// Wrapper that keeps a tab's panel mounted and toggles its visibility.
#[component]
fn TabBody(entry: TabEntry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let name = entry.display_name.clone();
    let visible = Signal::derive(move || {
        ctx.tabs
            .map
            .with(|m| m.get(&name).map(|e| e.visible).unwrap_or(false))
    });
    let body_class = move || {
        if visible.get() {
            css::tabBody.to_string()
        } else {
            format!("{} {}", css::tabBody, css::tabBodyHidden)
        }
    };

    let inner = match entry.kind {
        TabKind::File => view! {
            <EditorTab name=entry.display_name.clone() path=entry.path.clone() />
        }
        .into_any(),
        TabKind::Launcher => view! { <LauncherTab /> }.into_any(),
        TabKind::Terminal => view! {
            <TerminalTab session=entry.path.clone() />
        }
        .into_any(),
    };

    view! { <div class=body_class>{inner}</div> }
}
