//! Request payload types.

use serde_json::Value;

use crate::error::RequestError;

/// Request payload for `post` and `put`.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Pre-serialized text, transmitted as-is.
    Text(String),
    /// Structured data, serialized to JSON text before transmission.
    Json(Value),
}

impl Body {
    pub(crate) fn into_text(self) -> Result<String, RequestError> {
        match self {
            Body::Text(text) => Ok(text),
            Body::Json(value) => Ok(serde_json::to_string(&value)?),
        }
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Body::Text(text)
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Body::Text(text.to_string())
    }
}

impl From<Value> for Body {
    fn from(value: Value) -> Self {
        Body::Json(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_body_renders_compact_json() {
        let body = Body::Json(json!({"name": "widget"}));
        assert_eq!(body.into_text().unwrap(), r#"{"name":"widget"}"#);
    }

    #[test]
    fn text_body_is_transmitted_verbatim() {
        let body = Body::from("not json { at all");
        assert_eq!(body.into_text().unwrap(), "not json { at all");
    }

    #[test]
    fn value_converts_to_json_body() {
        let body: Body = json!({"id": 1}).into();
        assert!(matches!(body, Body::Json(_)));
    }
}
