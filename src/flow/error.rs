//! Failures surfaced by the payment flow.
//!
//! Every variant ends up as the message of `FlowState::Error`, so the
//! `Display` output is exactly what the user sees.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowError {
    /// Request could not be sent or its body could not be read.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Response body was not the JSON we expected.
    #[error("{0}")]
    Decode(String),

    /// The backend answered with an `error` field. Displayed as compact JSON.
    #[error("{payload}")]
    Remote { payload: Value },

    /// The payment SDK rejected the call.
    #[error("{0}")]
    Sdk(String),

    /// Confirmation was requested without a created payment intent.
    #[error("Invalid state")]
    InvalidState,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn remote_error_displays_as_json() {
        let err = FlowError::Remote {
            payload: json!("bad_key"),
        };
        assert_eq!(err.to_string(), "\"bad_key\"");

        let err = FlowError::Remote {
            payload: json!({ "message": "nope" }),
        };
        assert_eq!(err.to_string(), r#"{"message":"nope"}"#);
    }

    #[test]
    fn invalid_state_message_is_fixed() {
        assert_eq!(FlowError::InvalidState.to_string(), "Invalid state");
    }
}
