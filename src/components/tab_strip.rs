//! Tab strip.
//!
//! Renders the open-tab list in insertion order. Clicking a tab focuses
//! it; the inline close button closes it without focusing first.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::TabEntry;

stylance::import_crate_style!(css, "src/components/tab_strip.module.css");

#[component]
pub fn TabStrip() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let tabs = Signal::derive(move || ctx.tabs.map.with(|m| m.entries().to_vec()));

    view! {
        <ul class=css::strip role="tablist">
            <For
                each=move || tabs.get()
                key=|entry: &TabEntry| entry.display_name.clone()
                children=move |entry| {
                    let name = entry.display_name.clone();
                    let focus_name = name.clone();
                    let close_name = name.clone();
                    let active_name = name.clone();

                    let is_active = Signal::derive(move || {
                        ctx.tabs
                            .map
                            .with(|m| m.get(&active_name).map(|e| e.visible).unwrap_or(false))
                    });
                    let tab_class = move || {
                        if is_active.get() {
                            format!("{} {}", css::tab, css::tabActive)
                        } else {
                            css::tab.to_string()
                        }
                    };

                    view! {
                        <li class=css::item role="presentation">
                            <button
                                type="button"
                                class=tab_class
                                role="tab"
                                aria-selected=move || is_active.get()
                                on:click=move |_| ctx.tabs.focus(&focus_name)
                            >
                                <span class=css::label>{name.clone()}</span>
                                <span
                                    class=css::closeButton
                                    title="Close tab"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        ctx.tabs.close(&close_name);
                                    }
                                >
                                    <Icon icon=ic::CLOSE />
                                </span>
                            </button>
                        </li>
                    }
                }
            />
        </ul>
    }
}
