//! The four request helpers.
//!
//! # Design
//! Each helper is one linear sequence: build the request, execute it
//! on a fresh agent, log the response line, read the body. The verbs
//! are spelled out individually rather than funneled through a shared
//! dispatcher so each signature carries exactly the inputs its method
//! accepts (GET takes query parameters, DELETE takes no body).

use log::{debug, info};

use crate::agent::build_agent;
use crate::error::RequestError;
use crate::types::Body;

/// Executes a GET request.
///
/// Each `params` pair is appended to the URL as a percent-encoded
/// query parameter, in slice order. Returns the response body, or
/// `None` when the response carries no body.
pub fn get(
    url: &str,
    headers: &[(&str, &str)],
    params: &[(&str, &str)],
    ignore_tls_errors: bool,
) -> Result<Option<String>, RequestError> {
    let agent = build_agent(ignore_tls_errors);
    let mut request = agent.get(url);
    for (key, value) in params {
        request = request.query(*key, *value);
    }
    for (key, value) in headers {
        request = request.header(*key, *value);
    }
    read_body(request.call())
}

/// Executes a POST request.
///
/// `Body::Json` is serialized to JSON text before transmission;
/// `Body::Text` is sent as-is. No content-type header is set here, so
/// callers that need one pass it through `headers`.
pub fn post(
    url: &str,
    headers: &[(&str, &str)],
    body: Body,
    ignore_tls_errors: bool,
) -> Result<Option<String>, RequestError> {
    let text = body.into_text()?;
    let agent = build_agent(ignore_tls_errors);
    let mut request = agent.post(url);
    for (key, value) in headers {
        request = request.header(*key, *value);
    }
    read_body(request.send(text.as_bytes()))
}

/// Executes a PUT request. Same contract as [`post`].
pub fn put(
    url: &str,
    headers: &[(&str, &str)],
    body: Body,
    ignore_tls_errors: bool,
) -> Result<Option<String>, RequestError> {
    let text = body.into_text()?;
    let agent = build_agent(ignore_tls_errors);
    let mut request = agent.put(url);
    for (key, value) in headers {
        request = request.header(*key, *value);
    }
    read_body(request.send(text.as_bytes()))
}

/// Executes a DELETE request. No body is sent.
pub fn delete(
    url: &str,
    headers: &[(&str, &str)],
    ignore_tls_errors: bool,
) -> Result<Option<String>, RequestError> {
    let agent = build_agent(ignore_tls_errors);
    let mut request = agent.delete(url);
    for (key, value) in headers {
        request = request.header(*key, *value);
    }
    read_body(request.call())
}

/// Logs the response line and reads the body to completion.
///
/// An empty body maps to `None`; any status code with a body maps to
/// `Some(text)`.
fn read_body(
    result: Result<ureq::http::Response<ureq::Body>, ureq::Error>,
) -> Result<Option<String>, RequestError> {
    let mut response = result.map_err(RequestError::from)?;
    let status = response.status();
    debug!("protocol version: {:?}", response.version());
    info!("status code: {}", status.as_u16());
    debug!(
        "reason phrase: {}",
        status.canonical_reason().unwrap_or("<none>")
    );
    let text = response
        .body_mut()
        .read_to_string()
        .map_err(RequestError::from)?;
    Ok(if text.is_empty() { None } else { Some(text) })
}
