//! File browser panel.
//!
//! Lists the workspace root via the contents API and dispatches open
//! requests to the shell. The header offers new-file and new-directory
//! actions; both hit the backend and then re-fetch the listing.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::NEW_DIRECTORY_NAME;
use crate::models::{ContentEntry, ContentType};

stylance::import_crate_style!(css, "src/components/file_browser.module.css");

fn entry_icon(kind: ContentType) -> icondata::Icon {
    match kind {
        ContentType::Directory => ic::FOLDER,
        ContentType::Notebook => ic::FILE_TEXT,
        ContentType::File => ic::FILE,
    }
}

/// Directories first, then files, both alphabetical.
fn sort_listing(entries: &mut [ContentEntry]) {
    entries.sort_by(|a, b| {
        b.kind
            .is_directory()
            .cmp(&a.kind.is_directory())
            .then_with(|| a.name.cmp(&b.name))
    });
}

#[component]
pub fn FileBrowser() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let entries = RwSignal::new(Vec::<ContentEntry>::new());
    let error = RwSignal::new(None::<String>);

    let load = move || {
        spawn_local(async move {
            match api::contents::list_root().await {
                Ok(mut content) => {
                    sort_listing(&mut content);
                    error.set(None);
                    entries.set(content);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to list workspace: {}", e).into());
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    // Initial fetch, and a re-fetch whenever another panel bumps the epoch.
    Effect::new(move || {
        ctx.browser_epoch.track();
        load();
    });

    let create_file = move |_| {
        spawn_local(async move {
            match api::contents::create_file().await {
                Ok(()) => ctx.refresh_browser(),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to create file: {}", e).into());
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let create_directory = move |_| {
        spawn_local(async move {
            match api::contents::create_directory(NEW_DIRECTORY_NAME).await {
                Ok(()) => ctx.refresh_browser(),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to create directory: {}", e).into());
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class=css::browser>
            <div class=css::head>
                <h6 class=css::title>"Files"</h6>
                <div class=css::actions>
                    <button class=css::actionButton title="New file" on:click=create_file>
                        <Icon icon=ic::PLUS />
                    </button>
                    <button class=css::actionButton title="New directory" on:click=create_directory>
                        <Icon icon=ic::FOLDER />
                    </button>
                </div>
            </div>

            <Show when=move || error.get().is_some()>
                <div class=css::error>{move || error.get().unwrap_or_default()}</div>
            </Show>

            <ul class=css::list>
                <For
                    each=move || entries.get()
                    key=|entry| entry.path.clone()
                    children=move |entry| {
                        let icon = entry_icon(entry.kind);
                        let kind = entry.kind;
                        let path = entry.path.clone();
                        let open = move |_| {
                            if kind.is_directory() {
                                // Directory navigation is not modeled yet; the
                                // listing is root-only.
                                web_sys::console::log_1(
                                    &format!("Directory open not implemented: {}", path).into(),
                                );
                            } else {
                                ctx.tabs.open_file(&path);
                            }
                        };
                        view! {
                            <li class=css::item>
                                <a class=css::link on:click=open>
                                    <span class=css::itemIcon><Icon icon=icon /></span>
                                    <span class=css::name>{entry.name.clone()}</span>
                                </a>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(kind: ContentType, name: &str) -> ContentEntry {
        ContentEntry {
            kind,
            path: name.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_sort_listing_groups_directories_first() {
        let mut entries = vec![
            entry(ContentType::File, "train.py"),
            entry(ContentType::Directory, "src"),
            entry(ContentType::Notebook, "eda.ipynb"),
            entry(ContentType::Directory, "data"),
        ];
        sort_listing(&mut entries);
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["data", "src", "eda.ipynb", "train.py"]);
    }
}
