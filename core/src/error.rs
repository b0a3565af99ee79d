//! Error type for the request helpers.
//!
//! # Design
//! The helpers return `Result<Option<String>, RequestError>`, so a
//! failed request is never confused with a successful one that had an
//! empty body. `Url` gets a dedicated variant because a bad URL is a
//! caller mistake worth distinguishing from `Transport`, which covers
//! everything that went wrong on the wire.

use thiserror::Error;

/// Failures surfaced by `get`, `post`, `put`, and `delete`.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The target URL could not be parsed into a valid request URI.
    #[error("invalid request URL")]
    Url(#[source] ureq::Error),

    /// A structured body could not be rendered as JSON text.
    #[error("request body could not be serialized to JSON")]
    Serialization(#[from] serde_json::Error),

    /// Connection, TLS handshake, or response-read failure.
    #[error("request failed")]
    Transport(#[source] ureq::Error),
}

impl From<ureq::Error> for RequestError {
    fn from(err: ureq::Error) -> Self {
        match err {
            e @ (ureq::Error::BadUri(_) | ureq::Error::Http(_)) => RequestError::Url(e),
            e => RequestError::Transport(e),
        }
    }
}
