//! Remote API failure classification.
//!
//! ERROR HANDLING
//! ==============
//! Every non-2xx response and transport failure maps to one `ApiError`
//! variant. `Unauthorized` is the only variant that ends the session; pages
//! route it through `util::auth::surface_error`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Keys whose value is a general message rather than a field error.
const MESSAGE_KEYS: [&str; 3] = ["error", "message", "detail"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 401: the credential was rejected.
    #[error("not authorized")]
    Unauthorized { message: Option<String> },

    /// 403: the credential is valid but lacks permission for this call.
    #[error("forbidden")]
    Forbidden { message: Option<String> },

    /// 400 or 422 with per-field messages.
    #[error("{0}")]
    Validation(ValidationErrors),

    #[error("not found")]
    NotFound,

    #[error("server responded {status}")]
    Server { status: u16, message: Option<String> },

    /// Network failure or an undecodable success body.
    #[error("request failed: {0}")]
    Transport(String),
}

impl ApiError {
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Server { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Text to show the user, falling back when the server gave none.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        let message = match self {
            Self::Unauthorized { message } | Self::Forbidden { message } | Self::Server { message, .. } => {
                message.clone()
            }
            Self::Validation(errors) => errors.summary(),
            Self::NotFound | Self::Transport(_) => None,
        };
        message.unwrap_or_else(|| fallback.to_owned())
    }

    /// Like [`ApiError::user_message`] but lists every field error.
    #[must_use]
    pub fn detailed_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(errors) if !errors.is_empty() => errors.to_string(),
            _ => self.user_message(fallback),
        }
    }
}

/// Field errors from a 400/422 body such as `{"email": ["taken"]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    /// Value of the first `error`, `message` or `detail` key.
    pub message: Option<String>,
    pub fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) else {
            return Self::default();
        };
        let message = MESSAGE_KEYS.iter().find_map(|key| map.get(*key).map(text_of));
        let fields = map
            .into_iter()
            .filter(|(key, _)| !MESSAGE_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key, messages_of(value)))
            .collect();
        Self { message, fields }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.message.is_none() && self.fields.is_empty()
    }

    /// General message, else the first field message.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        self.message
            .clone()
            .or_else(|| self.fields.values().find_map(|msgs| msgs.first().cloned()))
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&[String]> {
        self.fields.get(name).map(Vec::as_slice)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::with_capacity(self.fields.len() + 1);
        if let Some(message) = &self.message {
            lines.push(message.clone());
        }
        for (field, messages) in &self.fields {
            lines.push(format!("{field}: {}", messages.join(", ")));
        }
        if lines.is_empty() {
            return f.write_str("invalid request");
        }
        f.write_str(&lines.join("\n"))
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(text_of).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

fn messages_of(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().map(text_of).collect(),
        other => vec![text_of(&other)],
    }
}

/// General message carried by an error body, if any.
fn body_message(body: &str) -> Option<String> {
    let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) else {
        return None;
    };
    MESSAGE_KEYS.iter().find_map(|key| map.get(*key).map(text_of))
}

/// Map a non-2xx response to an [`ApiError`].
#[must_use]
pub fn classify_failure(status: u16, body: &str) -> ApiError {
    match status {
        401 => ApiError::Unauthorized { message: body_message(body) },
        403 => ApiError::Forbidden { message: body_message(body) },
        400 | 422 => ApiError::Validation(ValidationErrors::from_body(body)),
        404 => ApiError::NotFound,
        _ => ApiError::Server { status, message: body_message(body) },
    }
}

/// Decode a 2xx body. An empty body decodes as JSON `null`, or as `{}` when
/// `T` rejects null.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] when the body does not match `T`.
pub fn decode_success<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let invalid = |e: serde_json::Error| ApiError::Transport(format!("invalid response body: {e}"));
    if body.trim().is_empty() {
        return serde_json::from_str("null").or_else(|_| serde_json::from_str("{}")).map_err(invalid);
    }
    serde_json::from_str(body).map_err(invalid)
}
