use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::flow::FlowError;

/// Order payload posted to the payment intent endpoint.
///
/// Field names are sent as-is (`payment_method_types` stays snake case).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderRequest {
    pub email: String,
    pub currency: String,
    pub items: Vec<String>,
    pub payment_method_types: Vec<String>,
}

/// Body of `GET /stripe-key`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyResponse {
    /// Kept untyped so a malformed key never hides a reported error.
    #[serde(default)]
    pub publishable_key: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl KeyResponse {
    /// The error field, if it is set to something truthy.
    pub fn reported_error(&self) -> Option<&Value> {
        self.error.as_ref().filter(|value| is_truthy(value))
    }

    pub fn publishable_key(&self) -> Result<&str, FlowError> {
        string_field(self.publishable_key.as_ref(), "publishableKey", "key")
    }
}

/// Body of `POST /create-payment-intent`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentResponse {
    #[serde(default)]
    pub client_secret: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl IntentResponse {
    /// The error field, if it is set to something truthy.
    pub fn reported_error(&self) -> Option<&Value> {
        self.error.as_ref().filter(|value| is_truthy(value))
    }

    pub fn client_secret(&self) -> Result<&str, FlowError> {
        string_field(self.client_secret.as_ref(), "clientSecret", "payment intent")
    }
}

fn string_field<'a>(
    value: Option<&'a Value>,
    field: &str,
    what: &str,
) -> Result<&'a str, FlowError> {
    match value {
        None | Some(Value::Null) => Err(FlowError::Decode(format!(
            "Missing {} in {} response",
            field, what
        ))),
        Some(Value::String(text)) => Ok(text),
        Some(other) => Err(FlowError::Decode(format!(
            "Invalid {} in {} response: {}",
            field, what, other
        ))),
    }
}

/// JavaScript truthiness of a JSON value.
///
/// The demo backend is consumed with `if (error)`, so `null`, `false`, `0`
/// and `""` all mean "no error".
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
