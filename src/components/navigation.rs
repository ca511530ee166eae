//! Navigation rail.
//!
//! Static column of icon buttons reserved for future side panels
//! (git, debug, secrets, settings, database). The handlers only log;
//! none of the panels exist yet.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/navigation.module.css");

fn log_placeholder(panel: &str) {
    web_sys::console::log_1(&format!("{} panel not implemented", panel).into());
}

#[component]
pub fn NavigationPanel() -> impl IntoView {
    view! {
        <div class=css::rail>
            <button
                class=format!("{} {}", css::button, css::buttonActive)
                title="Files"
            >
                <Icon icon=ic::FILE_TEXT />
            </button>
            <button class=css::button title="Git" on:click=move |_| log_placeholder("git")>
                <Icon icon=ic::BRANCH />
            </button>
            <button class=css::button title="Extensions">
                <Icon icon=ic::BOX />
            </button>
            <button class=css::button title="Debug" on:click=move |_| log_placeholder("debug")>
                <Icon icon=ic::RUN />
            </button>
            <button class=css::button title="Secrets" on:click=move |_| log_placeholder("secrets")>
                <Icon icon=ic::LOCK />
            </button>
            <button class=css::button title="Settings" on:click=move |_| log_placeholder("settings")>
                <Icon icon=ic::SETTINGS />
            </button>
            <button class=css::button title="Databases" on:click=move |_| log_placeholder("database")>
                <Icon icon=ic::DATABASE />
            </button>
            <button class=css::button title="Checks">
                <Icon icon=ic::CHECK />
            </button>
            <button class=format!("{} {}", css::button, css::buttonBottom) title="Help">
                <Icon icon=ic::HELP />
            </button>
        </div>
    }
}
