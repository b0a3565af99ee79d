//! Synchronous helpers for one-shot HTTP requests.
//!
//! # Overview
//! Four free functions (`get`, `post`, `put`, `delete`) that build a
//! request, execute it, and hand back the response body as text. Each
//! call is independent and blocking; nothing is shared between
//! invocations, so the helpers can be used from any number of threads
//! without coordination.
//!
//! # Design
//! - No client state: a fresh `ureq::Agent` is built per call and
//!   dropped when the call returns.
//! - HTTP status codes are data, not errors: a 404 body comes back the
//!   same way a 200 body does. Only URL, serialization, and transport
//!   problems produce a `RequestError`.
//! - Headers and query parameters are slices of pairs, so the caller
//!   controls their order.
//! - TLS verification can be disabled per call through an explicit
//!   flag, never by default.

mod agent;

pub mod client;
pub mod error;
pub mod types;

pub use client::{delete, get, post, put};
pub use error::RequestError;
pub use types::Body;
