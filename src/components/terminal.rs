//! Terminal tab.
//!
//! Bridges the keyboard and a scrollback widget to one terminal
//! WebSocket. Keystrokes are translated to control sequences, echoed
//! locally, and sent as `["stdin", text]` frames; inbound frame text is
//! appended to the scrollback verbatim.

use leptos::prelude::*;

use crate::api::terminals::{SocketStatus, TerminalSocket};
use crate::config::{MAX_TERMINAL_SCROLLBACK, TERMINAL_GREETING};
use crate::utils::Scrollback;

stylance::import_crate_style!(css, "src/components/terminal.module.css");

/// Translate a keydown into the byte sequence a shell expects.
///
/// Returns `None` for keys the widget does not handle (modifiers,
/// function keys); the event then keeps its default behavior.
fn key_to_bytes(key: &str, ctrl: bool) -> Option<String> {
    if ctrl {
        let mut chars = key.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && c.is_ascii_alphabetic()
        {
            let byte = c.to_ascii_lowercase() as u8 - b'a' + 1;
            return Some((byte as char).to_string());
        }
        return None;
    }
    match key {
        "Enter" => Some("\r".to_string()),
        "Backspace" => Some("\u{7f}".to_string()),
        "Tab" => Some("\t".to_string()),
        "Escape" => Some("\u{1b}".to_string()),
        "ArrowUp" => Some("\u{1b}[A".to_string()),
        "ArrowDown" => Some("\u{1b}[B".to_string()),
        "ArrowLeft" => Some("\u{1b}[D".to_string()),
        "ArrowRight" => Some("\u{1b}[C".to_string()),
        _ if key.chars().count() == 1 => Some(key.to_string()),
        _ => None,
    }
}

fn status_label(status: &SocketStatus) -> &'static str {
    match status {
        SocketStatus::Connecting => "connecting...",
        SocketStatus::Open => "connected",
        SocketStatus::Closed => "disconnected",
        SocketStatus::Errored => "connection error",
    }
}

#[component]
pub fn TerminalTab(session: String) -> impl IntoView {
    let scrollback = RwSignal::new(Scrollback::new(MAX_TERMINAL_SCROLLBACK));
    let status = RwSignal::new(SocketStatus::Connecting);
    let socket = StoredValue::new_local(None::<TerminalSocket>);

    let container_ref = NodeRef::<leptos::html::Div>::new();
    let output_ref = NodeRef::<leptos::html::Div>::new();

    // Connect once on mount. The socket lives until the tab closes; its
    // Drop tears down the handlers and the connection.
    let connect_started = StoredValue::new(false);
    {
        let session = session.clone();
        Effect::new(move || {
            if connect_started.get_value() {
                return;
            }
            connect_started.set_value(true);

            let on_output = move |text: String| scrollback.update(|sb| sb.push(text));
            let on_status = move |st: SocketStatus| {
                if st == SocketStatus::Open {
                    scrollback.update(|sb| sb.push(TERMINAL_GREETING));
                }
                status.set(st);
            };

            match TerminalSocket::connect(&session, on_output, on_status) {
                Ok(s) => socket.set_value(Some(s)),
                Err(e) => {
                    web_sys::console::error_1(&e.to_string().into());
                    status.set(SocketStatus::Errored);
                    scrollback.update(|sb| sb.push(format!("{}\r\n", e)));
                }
            }
        });
    }

    // Grab keyboard focus on mount.
    Effect::new(move || {
        if let Some(el) = container_ref.get() {
            let _ = el.focus();
        }
    });

    // Pin the view to the bottom as output arrives.
    Effect::new(move || {
        scrollback.track();
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    on_cleanup(move || socket.set_value(None));

    let handle_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.meta_key() || ev.alt_key() {
            return;
        }
        let Some(bytes) = key_to_bytes(&ev.key(), ev.ctrl_key()) else {
            return;
        };
        ev.prevent_default();
        // Local echo mirrors exactly what goes on the wire.
        scrollback.update(|sb| sb.push(bytes.clone()));
        socket.with_value(|s| {
            if let Some(s) = s
                && let Err(e) = s.send_stdin(&bytes)
            {
                web_sys::console::warn_1(&e.to_string().into());
            }
        });
    };

    let status_class = move || match status.get() {
        SocketStatus::Open => css::statusLine.to_string(),
        _ => format!("{} {}", css::statusLine, css::statusOffline),
    };

    view! {
        <div
            node_ref=container_ref
            class=css::terminal
            tabindex="0"
            on:keydown=handle_keydown
        >
            <div node_ref=output_ref class=css::screen>
                <pre class=css::output>
                    <For
                        each=move || scrollback.with(|sb| sb.to_vec())
                        key=|chunk| chunk.id
                        children=|chunk| view! { <span>{chunk.text}</span> }
                    />
                </pre>
            </div>
            <div class=status_class>
                {move || status.with(|s| status_label(s))}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_keys_pass_through() {
        assert_eq!(key_to_bytes("a", false).as_deref(), Some("a"));
        assert_eq!(key_to_bytes("Z", false).as_deref(), Some("Z"));
        assert_eq!(key_to_bytes(" ", false).as_deref(), Some(" "));
        assert_eq!(key_to_bytes("~", false).as_deref(), Some("~"));
    }

    #[test]
    fn test_named_keys_map_to_control_bytes() {
        assert_eq!(key_to_bytes("Enter", false).as_deref(), Some("\r"));
        assert_eq!(key_to_bytes("Backspace", false).as_deref(), Some("\u{7f}"));
        assert_eq!(key_to_bytes("Tab", false).as_deref(), Some("\t"));
        assert_eq!(key_to_bytes("Escape", false).as_deref(), Some("\u{1b}"));
        assert_eq!(key_to_bytes("ArrowUp", false).as_deref(), Some("\u{1b}[A"));
        assert_eq!(key_to_bytes("ArrowLeft", false).as_deref(), Some("\u{1b}[D"));
    }

    #[test]
    fn test_ctrl_chords() {
        assert_eq!(key_to_bytes("c", true).as_deref(), Some("\u{3}"));
        assert_eq!(key_to_bytes("D", true).as_deref(), Some("\u{4}"));
        assert_eq!(key_to_bytes("1", true), None);
    }

    #[test]
    fn test_unhandled_keys_are_ignored() {
        assert_eq!(key_to_bytes("Shift", false), None);
        assert_eq!(key_to_bytes("F5", false), None);
        assert_eq!(key_to_bytes("PageDown", false), None);
    }
}
