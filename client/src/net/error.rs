//! Request failure taxonomy for the REST client.
//!
//! Every API helper returns `Result<_, ApiError>`. The `Display` text of an
//! error is exactly what the UI shows in a toast, so server messages must pass
//! through untouched.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Shown when the server rejects a request without a usable `message`.
pub const FALLBACK_MESSAGE: &str = "Something went wrong!";

/// Shown when no response arrives (offline, CORS, DNS, timeout).
pub const NETWORK_MESSAGE: &str = "No response from server. Check your network.";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response. `message` is the body's `message` field verbatim,
    /// or the generic fallback.
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("No response from server. Check your network.")]
    Network,
    /// A 2xx body that does not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// The request could not be built (serialization, form data).
    #[error("{0}")]
    Request(String),
    /// Called during server-side rendering, where the browser API is absent.
    #[error("not available on server")]
    Unavailable,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Build a `Server` error from a rejected response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Server {
            status,
            message: server_message(body).unwrap_or_else(|| FALLBACK_MESSAGE.to_owned()),
        }
    }
}

/// Extract a non-blank `message` string from a JSON error body.
pub fn server_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.message.filter(|message| !message.trim().is_empty())
}
