use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::MerchantConfig;

/// Arguments of the SDK initialization call.
#[derive(Debug, Clone, PartialEq)]
pub struct SdkInitParams {
    pub publishable_key: String,
    pub merchant_identifier: String,
    pub url_scheme: String,
    pub set_return_url_scheme_on_android: bool,
}

impl SdkInitParams {
    pub fn new(publishable_key: String, merchant: &MerchantConfig) -> Self {
        Self {
            publishable_key,
            merchant_identifier: merchant.merchant_identifier.clone(),
            url_scheme: merchant.url_scheme.clone(),
            set_return_url_scheme_on_android: merchant.set_return_url_scheme_on_android,
        }
    }
}

/// Postal address. Every part is optional; billing often only has a country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", alias = "postal_code")]
    pub postal_code: Option<String>,
}

/// Shipping or billing contact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactDetails {
    pub address: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_details: Option<ContactDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_details: Option<ContactDetails>,
}

/// Second argument of the SDK confirmation call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmParams {
    /// Provider spelling, e.g. `Klarna`.
    pub payment_method_type: String,
    pub payment_method_data: PaymentMethodData,
}

/// Error reported by the SDK for a confirmation attempt.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SdkError {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Result of the SDK confirmation call: an error, or the payment intent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmOutcome {
    #[serde(default)]
    pub error: Option<SdkError>,
    #[serde(default)]
    pub payment_intent: Option<Value>,
}

impl ConfirmOutcome {
    pub fn succeeded(payment_intent: Value) -> Self {
        Self {
            error: None,
            payment_intent: Some(payment_intent),
        }
    }

    pub fn failed(error: SdkError) -> Self {
        Self {
            error: Some(error),
            payment_intent: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn address_accepts_snake_case_postal_code() {
        let address: Address =
            toml::from_str("country = \"US\"\npostal_code = \"77063\"").unwrap();
        assert_eq!(address.postal_code.as_deref(), Some("77063"));
        assert_eq!(address.country.as_deref(), Some("US"));
    }

    #[test]
    fn confirm_params_serialize_like_the_sdk_call() {
        let params = ConfirmParams {
            payment_method_type: "Klarna".into(),
            payment_method_data: PaymentMethodData {
                shipping_details: None,
                billing_details: Some(ContactDetails {
                    address: Address {
                        country: Some("US".into()),
                        ..Address::default()
                    },
                    email: Some("customer@email.us".into()),
                    ..ContactDetails::default()
                }),
            },
        };

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "paymentMethodType": "Klarna",
                "paymentMethodData": {
                    "billingDetails": {
                        "address": { "country": "US" },
                        "email": "customer@email.us"
                    }
                }
            })
        );
    }

    #[test]
    fn outcome_reads_error_message() {
        let outcome: ConfirmOutcome =
            serde_json::from_value(json!({ "error": { "message": "card_declined" } })).unwrap();
        assert_eq!(outcome.error.unwrap().message, "card_declined");
        assert!(outcome.payment_intent.is_none());
    }
}
