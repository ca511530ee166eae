//! Terminals API operations and the WebSocket bridge.
//!
//! A terminal tab holds exactly one [`TerminalSocket`]. The socket owns
//! its event closures, so dropping it (when the tab closes) tears the
//! handlers down and closes the connection; there is no reconnect.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{CloseEvent, Event, MessageEvent, WebSocket};

use crate::api::error::{ApiError, SocketError};
use crate::api::http::{self, Method};
use crate::config::{API_BASE_URL, WS_BASE_URL};
use crate::models::{TerminalFrame, TerminalModel};

/// Create a terminal session on the backend.
pub async fn create() -> Result<TerminalModel, ApiError> {
    http::request_json(
        Method::Post,
        &format!("{}/api/terminals", API_BASE_URL),
        None,
    )
    .await
}

/// List the backend's terminal sessions.
pub async fn list() -> Result<Vec<TerminalModel>, ApiError> {
    http::fetch_json(&format!("{}/api/terminals", API_BASE_URL)).await
}

/// WebSocket URL for a terminal session.
pub fn websocket_url(session: &str) -> String {
    format!("{}/api/terminals/websocket/{}", WS_BASE_URL, session)
}

// =============================================================================
// TerminalSocket
// =============================================================================

/// Connection state reported to the owning tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SocketStatus {
    Connecting,
    Open,
    Closed,
    Errored,
}

/// A live bidirectional terminal connection.
///
/// Inbound frames are parsed as `[channel, text]` and `text` is handed
/// to `on_output` verbatim. The closures are stored on the struct rather
/// than leaked, so the socket's lifetime is the tab's lifetime.
pub struct TerminalSocket {
    ws: WebSocket,
    _on_open: Closure<dyn FnMut()>,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _on_error: Closure<dyn FnMut(Event)>,
    _on_close: Closure<dyn FnMut(CloseEvent)>,
}

impl TerminalSocket {
    /// Open the socket for `session` and wire up the callbacks.
    pub fn connect(
        session: &str,
        on_output: impl Fn(String) + 'static,
        on_status: impl Fn(SocketStatus) + 'static,
    ) -> Result<Self, SocketError> {
        let url = websocket_url(session);
        let ws = WebSocket::new(&url)
            .map_err(|e| SocketError::ConnectFailed(format!("{:?}", e)))?;

        let on_status = Rc::new(on_status);

        let status = on_status.clone();
        let on_open = Closure::wrap(Box::new(move || {
            status(SocketStatus::Open);
        }) as Box<dyn FnMut()>);
        ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));

        let on_message = Closure::wrap(Box::new(move |ev: MessageEvent| {
            let Some(raw) = ev.data().as_string() else {
                return;
            };
            match TerminalFrame::parse(&raw) {
                Some(frame) => on_output(frame.text),
                None => {
                    web_sys::console::warn_1(&format!("Unrecognized terminal frame: {}", raw).into());
                }
            }
        }) as Box<dyn FnMut(MessageEvent)>);
        ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

        let status = on_status.clone();
        let on_error = Closure::wrap(Box::new(move |_: Event| {
            status(SocketStatus::Errored);
        }) as Box<dyn FnMut(Event)>);
        ws.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        let status = on_status;
        let on_close = Closure::wrap(Box::new(move |_: CloseEvent| {
            status(SocketStatus::Closed);
        }) as Box<dyn FnMut(CloseEvent)>);
        ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));

        Ok(Self {
            ws,
            _on_open: on_open,
            _on_message: on_message,
            _on_error: on_error,
            _on_close: on_close,
        })
    }

    /// Send `text` as a `["stdin", text]` frame.
    pub fn send_stdin(&self, text: &str) -> Result<(), SocketError> {
        let frame = TerminalFrame::stdin(text);
        self.ws
            .send_with_str(&frame.encode())
            .map_err(|e| SocketError::SendFailed(format!("{:?}", e)))
    }
}

impl Drop for TerminalSocket {
    fn drop(&mut self) {
        self.ws.set_onopen(None);
        self.ws.set_onmessage(None);
        self.ws.set_onerror(None);
        self.ws.set_onclose(None);
        let _ = self.ws.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_websocket_url_shape() {
        assert_eq!(
            websocket_url("1"),
            "ws://localhost:8888/api/terminals/websocket/1"
        );
    }
}
