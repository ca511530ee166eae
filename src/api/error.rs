//! Custom error types for the backend client.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`ApiError`] - REST request failures
//! - [`SocketError`] - Terminal WebSocket failures

use std::fmt;

/// REST request failures.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Browser window not available
    NoWindow,
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Network request failed (DNS, CORS, refused connection)
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    HttpError(u16),
    /// Failed to read response body
    ResponseReadFailed,
    /// Response body was not text
    InvalidContent,
    /// JSON parsing error
    JsonParseError(String),
    /// Request timed out
    Timeout,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::HttpError(status) => write!(f, "HTTP error: {}", status),
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::InvalidContent => write!(f, "Invalid response content"),
            Self::JsonParseError(msg) => write!(f, "JSON parse error: {}", msg),
            Self::Timeout => write!(f, "Request timed out"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Terminal WebSocket failures.
#[derive(Debug, Clone)]
pub enum SocketError {
    /// Opening the socket failed outright (bad URL, insecure context)
    ConnectFailed(String),
    /// A frame could not be sent (socket closing or closed)
    SendFailed(String),
}

impl fmt::Display for SocketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConnectFailed(msg) => write!(f, "Failed to open terminal socket: {}", msg),
            Self::SendFailed(msg) => write!(f, "Failed to send terminal input: {}", msg),
        }
    }
}

impl std::error::Error for SocketError {}
