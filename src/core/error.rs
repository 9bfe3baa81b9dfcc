use serde_json::{Map, Value};
use std::error::Error as StdError;

/// Library-wide Result type
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Every failure a gateway call can produce
#[derive(thiserror::Error, Debug)]
pub enum GatewayError {
    /// No HTTP response was obtained (DNS, refused connection, timeout, TLS)
    #[error("Request failed: {message}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// The gateway answered with a status outside 2xx
    #[error("HTTP Error {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// 2xx status whose body could not be read or is not a JSON object
    #[error("Malformed response (HTTP {status}): {reason}")]
    MalformedResponse { status: u16, reason: String },

    /// Missing or invalid configuration, or the transport could not be built
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(source: reqwest::Error) -> Self {
        GatewayError::Transport {
            message: describe_chain(&source),
            source,
        }
    }
}

impl GatewayError {
    pub fn http_status(status: u16, message: impl Into<String>) -> Self {
        GatewayError::HttpStatus {
            status,
            message: message.into(),
        }
    }

    pub fn malformed(status: u16, reason: impl Into<String>) -> Self {
        GatewayError::MalformedResponse {
            status,
            reason: reason.into(),
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        GatewayError::Configuration(msg.into())
    }

    /// HTTP status of the response, when one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::HttpStatus { status, .. }
            | GatewayError::MalformedResponse { status, .. } => Some(*status),
            GatewayError::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            GatewayError::Configuration(_) => None,
        }
    }
}

/// Render an error and all of its causes, joined with ": ".
///
/// A cause whose text is already part of the message is skipped, since some
/// layers repeat their inner error in their own `Display`.
pub fn describe_chain(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut cause = err.source();

    while let Some(inner) = cause {
        let text = inner.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        cause = inner.source();
    }

    message
}

/// The gateway's own explanation inside a JSON object: `error`, else `message`.
/// Null values count as absent.
pub fn payload_message(payload: &Map<String, Value>) -> Option<String> {
    ["error", "message"]
        .iter()
        .filter_map(|key| payload.get(*key))
        .find(|value| !value.is_null())
        .map(display_value)
}

/// Best-effort human message from a non-2xx response body.
///
/// A JSON object yields its `error` field, else its `message` field, else the
/// whole object. Any other JSON value is rendered as-is. A body that is not
/// JSON is returned verbatim.
pub fn extract_error_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => {
            payload_message(&map).unwrap_or_else(|| Value::Object(map).to_string())
        }
        Ok(value) => display_value(&value),
        Err(_) => body.to_string(),
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
