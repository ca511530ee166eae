//! File editor tab.
//!
//! Fetches the file's content on first activation and renders it in a
//! plain-text code editor. The toolbar issues save, rename, and delete
//! requests; outcomes land in a status line next to the buttons.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::format::{file_name, join_path, parent_dir};

stylance::import_crate_style!(css, "src/components/editor.module.css");

/// Outcome of the latest toolbar action.
#[derive(Clone, Debug, PartialEq)]
enum EditorStatus {
    Info(String),
    Error(String),
}

#[component]
pub fn EditorTab(name: String, path: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let content = RwSignal::new(String::new());
    let dirty = RwSignal::new(false);
    let readonly = RwSignal::new(false);
    let status = RwSignal::new(None::<EditorStatus>);
    let rename_to = RwSignal::new(file_name(&path).to_string());

    // Initial content load. Runs once per tab entry: the flag was set when
    // the tab was opened and stays cleared for the entry's lifetime, so a
    // hide/show cycle does not re-fetch.
    let load_started = StoredValue::new(false);
    {
        let name = name.clone();
        let path = path.clone();
        Effect::new(move || {
            if load_started.get_value() {
                return;
            }
            load_started.set_value(true);

            let needs = ctx
                .tabs
                .map
                .with_untracked(|m| m.get(&name).map(|e| e.needs_initial_load).unwrap_or(false));
            if !needs {
                return;
            }
            ctx.tabs.mark_loaded(&name);

            let path = path.clone();
            spawn_local(async move {
                match api::contents::get_file(&path).await {
                    Ok(model) => {
                        readonly.set(model.writable == Some(false));
                        match model.text() {
                            Ok(text) => {
                                content.set(text);
                                dirty.set(false);
                            }
                            Err(e) => {
                                status.set(Some(EditorStatus::Error(e.to_string())));
                            }
                        }
                    }
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to load {}: {}", path, e).into(),
                        );
                        status.set(Some(EditorStatus::Error(e.to_string())));
                    }
                }
            });
        });
    }

    let save = {
        let path = path.clone();
        move |_| {
            let path = path.clone();
            spawn_local(async move {
                match api::contents::save(&path, &content.get_untracked()).await {
                    Ok(()) => {
                        dirty.set(false);
                        status.set(Some(EditorStatus::Info("Saved".to_string())));
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to save {}: {}", path, e).into());
                        status.set(Some(EditorStatus::Error(e.to_string())));
                    }
                }
            });
        }
    };

    let rename = {
        let name = name.clone();
        let path = path.clone();
        move |_| {
            let new_name = rename_to.get_untracked().trim().to_string();
            if new_name.is_empty() || new_name == file_name(&path) {
                return;
            }
            let new_path = join_path(parent_dir(&path), &new_name);
            // Refuse a rename that would collide with another open tab
            // before touching the backend.
            if ctx.tabs.map.with_untracked(|m| m.get(&new_path).is_some()) {
                status.set(Some(EditorStatus::Error(format!(
                    "{} is already open",
                    new_path
                ))));
                return;
            }
            let name = name.clone();
            let path = path.clone();
            spawn_local(async move {
                match api::contents::rename(&path, &new_path).await {
                    Ok(()) => {
                        ctx.tabs.rename_file(&name, &new_path);
                        ctx.refresh_browser();
                    }
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to rename {}: {}", path, e).into(),
                        );
                        status.set(Some(EditorStatus::Error(e.to_string())));
                    }
                }
            });
        }
    };

    let delete = {
        let name = name.clone();
        let path = path.clone();
        move |_| {
            let name = name.clone();
            let path = path.clone();
            spawn_local(async move {
                match api::contents::delete(&path).await {
                    Ok(()) => {
                        ctx.tabs.close(&name);
                        ctx.refresh_browser();
                    }
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to delete {}: {}", path, e).into(),
                        );
                        status.set(Some(EditorStatus::Error(e.to_string())));
                    }
                }
            });
        }
    };

    let on_input = move |ev: leptos::ev::Event| {
        let Some(target) = ev.target() else { return };
        let area = target.unchecked_into::<web_sys::HtmlTextAreaElement>();
        content.set(area.value());
        dirty.set(true);
        status.set(None);
    };

    let on_rename_input = move |ev: leptos::ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        rename_to.set(input.value());
    };

    let status_view = move || {
        status.get().map(|s| match s {
            EditorStatus::Info(msg) => view! { <span class=css::status>{msg}</span> }.into_any(),
            EditorStatus::Error(msg) => {
                view! { <span class=format!("{} {}", css::status, css::statusError)>{msg}</span> }
                    .into_any()
            }
        })
    };

    view! {
        <div class=css::editor>
            <div class=css::toolbar>
                <button class=css::toolButton title="Save" on:click=save>
                    <Icon icon=ic::SAVE />
                </button>
                <input
                    class=css::renameInput
                    type="text"
                    spellcheck="false"
                    prop:value=rename_to
                    on:input=on_rename_input
                />
                <button class=css::toolButton title="Rename" on:click=rename>
                    <Icon icon=ic::RENAME />
                </button>
                <button class=css::toolButton title="Delete" on:click=delete>
                    <Icon icon=ic::TRASH />
                </button>
                <Show when=move || dirty.get()>
                    <span class=css::dirtyDot title="Unsaved changes">"\u{25cf}"</span>
                </Show>
                {status_view}
            </div>
            <textarea
                class=css::buffer
                spellcheck="false"
                wrap="off"
                prop:value=content
                prop:readOnly=readonly
                on:input=on_input
            ></textarea>
        </div>
    }
}
