//! Launcher tab.
//!
//! Lists the backend's kernel specifications and offers a "New Terminal"
//! action. Creating a terminal asks the backend for a session first and
//! only then opens the tab, so the socket has something to attach to.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{KernelSpec, TerminalModel};

stylance::import_crate_style!(css, "src/components/launcher.module.css");

#[component]
pub fn LauncherTab() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let specs = RwSignal::new(Vec::<KernelSpec>::new());
    let sessions = RwSignal::new(Vec::<TerminalModel>::new());
    let error = RwSignal::new(None::<String>);

    // Kernelspec listing (session-cached) and running terminal sessions,
    // fetched once per mount.
    let load_started = StoredValue::new(false);
    Effect::new(move || {
        if load_started.get_value() {
            return;
        }
        load_started.set_value(true);
        spawn_local(async move {
            match api::kernelspecs::list().await {
                Ok(resp) => specs.set(resp.sorted()),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to list kernelspecs: {}", e).into(),
                    );
                    error.set(Some(e.to_string()));
                }
            }
        });
        spawn_local(async move {
            match api::terminals::list().await {
                Ok(models) => sessions.set(models),
                Err(e) => {
                    // Not fatal for the launcher: the new-terminal card
                    // still works without the running-session list.
                    web_sys::console::warn_1(&format!("Failed to list terminals: {}", e).into());
                }
            }
        });
    });

    let open_terminal = move |_| {
        spawn_local(async move {
            let session = match api::terminals::create().await {
                Ok(model) => model.name,
                Err(e) => {
                    // The socket endpoint spawns a shell on demand, so a
                    // failed create still gets a usable local session id.
                    web_sys::console::warn_1(
                        &format!("Failed to create terminal session: {}", e).into(),
                    );
                    ctx.tabs.next_terminal_id()
                }
            };
            ctx.tabs.open_terminal(&session);
        });
    };

    view! {
        <div class=css::launcher>
            <h1 class=css::heading>"Notebook"</h1>

            <Show when=move || error.get().is_some()>
                <div class=css::error>{move || error.get().unwrap_or_default()}</div>
            </Show>

            <div class=css::grid>
                <For
                    each=move || specs.get()
                    key=|spec: &KernelSpec| spec.name.clone()
                    children=|spec| {
                        let logo = spec.logo_url().map(str::to_string);
                        view! {
                            <div class=css::card>
                                {match logo {
                                    Some(url) => view! {
                                        <img class=css::logo src=url alt=spec.spec.display_name.clone() />
                                    }.into_any(),
                                    None => view! {
                                        <span class=css::logoFallback><Icon icon=ic::FILE_TEXT /></span>
                                    }.into_any(),
                                }}
                                <h2 class=css::cardTitle>{spec.spec.display_name.clone()}</h2>
                                <span class=css::cardMeta>{spec.spec.language.clone()}</span>
                            </div>
                        }
                    }
                />
            </div>

            <hr class=css::divider />

            <h1 class=css::heading>"Terminal"</h1>
            <div class=css::grid>
                <button class=css::card on:click=open_terminal>
                    <span class=css::logoFallback><Icon icon=ic::TERMINAL /></span>
                    <h2 class=css::cardTitle>"New Terminal"</h2>
                </button>
                <For
                    each=move || sessions.get()
                    key=|model: &TerminalModel| model.name.clone()
                    children=move |model| {
                        let session = model.name.clone();
                        let label = format!("Terminal {}", session);
                        view! {
                            <button
                                class=css::card
                                on:click=move |_| { ctx.tabs.open_terminal(&session); }
                            >
                                <span class=css::logoFallback><Icon icon=ic::TERMINAL /></span>
                                <h2 class=css::cardTitle>{label}</h2>
                            </button>
                        }
                    }
                />
            </div>
        </div>
    }
}
