//! Error Types
//!
//! Every error is recovered at the component boundary and rendered as UI
//! state; nothing here is fatal.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Fallback text when a failure carries no readable message
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Failure of a request to the remote API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// `fetch` rejected; holds the JS `Error.message` when there was one
    #[error("{}", .0.as_deref().unwrap_or(UNKNOWN_ERROR))]
    Network(Option<String>),
    #[error("{}", status_message(*.status, .message))]
    Status { status: u16, message: Option<String> },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("browser window is unavailable")]
    NoWindow,
}

fn status_message(status: u16, message: &Option<String>) -> String {
    match message {
        Some(m) => m.clone(),
        None => format!("Request failed with status code {}", status),
    }
}

impl ApiError {
    /// Readable reason, or `None` if the failure was not a recognizable error
    pub fn message(&self) -> Option<String> {
        match self {
            ApiError::Network(message) => message.clone(),
            other => Some(other.to_string()),
        }
    }

    /// Convert a thrown JS value, keeping `Error.message` if it is an `Error`
    pub fn from_js(value: JsValue) -> Self {
        let message = value
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()));
        ApiError::Network(message)
    }
}

impl From<serde_wasm_bindgen::Error> for ApiError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// A required or malformed field, shown next to its input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

impl ValidationError {
    pub const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Find the message for one field, if any
pub fn field_error(errors: &[ValidationError], field: &str) -> Option<&'static str> {
    errors.iter().find(|e| e.field == field).map(|e| e.message)
}

/// Why a form submission did not reach its callback
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("{} field(s) invalid", .0.len())]
    Invalid(Vec<ValidationError>),
    /// The user answered "no" to the edit confirmation
    #[error("confirmation declined")]
    ConfirmationDeclined,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_without_message_falls_back() {
        let err = ApiError::Network(None);
        assert_eq!(err.message(), None);
        assert_eq!(err.to_string(), UNKNOWN_ERROR);
    }

    #[test]
    fn test_status_error_message() {
        let err = ApiError::Status { status: 404, message: None };
        assert_eq!(err.message().as_deref(), Some("Request failed with status code 404"));

        let err = ApiError::Status {
            status: 404,
            message: Some("Recipe with id '9999' not found".into()),
        };
        assert_eq!(err.to_string(), "Recipe with id '9999' not found");
    }

    #[test]
    fn test_field_error_lookup() {
        let errors = vec![
            ValidationError::new("name", "Name is required."),
            ValidationError::new("cookTimeMinutes", "Required."),
        ];
        assert_eq!(field_error(&errors, "name"), Some("Name is required."));
        assert_eq!(field_error(&errors, "servings"), None);
    }
}
