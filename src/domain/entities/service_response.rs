//! Interpretation of the shortening API's reply.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::transport::RawResponse;
use crate::error::UNKNOWN_ERROR;

/// What the service said, after decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceResponse {
    /// The service returned a non-empty `shortenedUrl`.
    Success { shortened_url: String },
    /// Well-formed reply without a usable `shortenedUrl`.
    ServiceError { message: String },
    /// Body was not JSON, or not declared as JSON.
    DecodeError { raw_body: String },
}

/// Fields of interest in a JSON object reply. Anything else is ignored.
///
/// Both fields are kept as raw values since the service does not commit to
/// a schema. Only ever built from a [`Value::Object`].
#[derive(Debug, Deserialize)]
struct ApiReply {
    #[serde(rename = "shortenedUrl", default)]
    shortened_url: Option<Value>,
    #[serde(default)]
    message: Option<Value>,
}

impl ServiceResponse {
    /// Interprets a raw response.
    ///
    /// # Rules
    ///
    /// 1. `Content-Type` must be `application/json` or an `application/*+json`
    ///    type, otherwise [`ServiceResponse::DecodeError`]
    /// 2. Body must parse as JSON, otherwise [`ServiceResponse::DecodeError`]
    /// 3. A JSON object with a non-empty string `shortenedUrl` gives
    ///    [`ServiceResponse::Success`]
    /// 4. Any other JSON gives [`ServiceResponse::ServiceError`] with the
    ///    object's `message` field, or `"Unknown error"` when there is none
    ///
    /// The HTTP status is not consulted. The service reports errors in the body.
    pub fn interpret(raw: &RawResponse) -> Self {
        if !is_json_content_type(raw.content_type.as_deref()) {
            return Self::DecodeError {
                raw_body: raw.body.clone(),
            };
        }

        let value: Value = match serde_json::from_str(&raw.body) {
            Ok(value) => value,
            Err(_) => {
                return Self::DecodeError {
                    raw_body: raw.body.clone(),
                };
            }
        };

        // Arrays would otherwise deserialize positionally into `ApiReply`.
        if !value.is_object() {
            return Self::ServiceError {
                message: UNKNOWN_ERROR.to_string(),
            };
        }

        let reply: ApiReply = match serde_json::from_value(value) {
            Ok(reply) => reply,
            Err(_) => {
                return Self::ServiceError {
                    message: UNKNOWN_ERROR.to_string(),
                };
            }
        };

        match reply.shortened_url {
            Some(Value::String(url)) if !url.is_empty() => Self::Success { shortened_url: url },
            _ => Self::ServiceError {
                message: message_text(reply.message),
            },
        }
    }

    pub fn into_shortened_url(self) -> Option<String> {
        match self {
            Self::Success { shortened_url } => Some(shortened_url),
            _ => None,
        }
    }
}

fn message_text(message: Option<Value>) -> String {
    match message {
        Some(Value::String(text)) => text,
        Some(Value::Null) | None => UNKNOWN_ERROR.to_string(),
        Some(other) => other.to_string(),
    }
}

fn is_json_content_type(content_type: Option<&str>) -> bool {
    let Some(content_type) = content_type else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
