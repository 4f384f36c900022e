//! `PaymentSdk` backed by the provider's public REST API.
//!
//! Mirrors what the mobile SDK does on device: the publishable key
//! authenticates the call and the client secret proves access to the intent.

use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::Client;
use serde_json::Value;

use crate::config::ProviderConfig;
use crate::flow::FlowError;

use super::types::{Address, ConfirmOutcome, ConfirmParams, ContactDetails, SdkError, SdkInitParams};
use super::PaymentSdk;

/// Separator between the intent id and the secret part of a client secret.
const SECRET_SEPARATOR: &str = "_secret_";

/// Path the SDK registers as its redirect target under the app's URL scheme.
const RETURN_PATH: &str = "safepay";

pub struct StripeSdk {
    client: Client,
    api_base: String,
    session: RwLock<Option<SdkInitParams>>,
}

impl StripeSdk {
    pub fn new(config: &ProviderConfig) -> Result<Self, FlowError> {
        Ok(Self {
            client: Client::builder().build()?,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            session: RwLock::new(None),
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.session.read().is_some()
    }
}

#[async_trait]
impl PaymentSdk for StripeSdk {
    async fn initialize(&self, params: &SdkInitParams) -> Result<(), FlowError> {
        let key = params.publishable_key.trim();
        if key.is_empty() {
            return Err(FlowError::Sdk("A publishable key is required".to_string()));
        }
        if !key.starts_with("pk_") {
            return Err(FlowError::Sdk(format!(
                "Invalid publishable key: expected a key starting with 'pk_', got '{}'",
                redact(key)
            )));
        }

        *self.session.write() = Some(params.clone());
        tracing::info!(
            merchant = %params.merchant_identifier,
            key = %redact(key),
            "Payment SDK initialized"
        );
        Ok(())
    }

    async fn confirm_payment(
        &self,
        client_secret: &str,
        params: &ConfirmParams,
    ) -> Result<ConfirmOutcome, FlowError> {
        let session = self
            .session
            .read()
            .clone()
            .ok_or_else(|| FlowError::Sdk("Payment SDK is not initialized".to_string()))?;
        let intent_id = intent_id_from_secret(client_secret)?;

        let mut form = vec![("client_secret".to_string(), client_secret.to_string())];
        form.extend(encode_confirm_params(
            params,
            &format!("{}://{}", session.url_scheme, RETURN_PATH),
        ));

        let url = format!("{}/v1/payment_intents/{}/confirm", self.api_base, intent_id);
        tracing::debug!(%url, method = %params.payment_method_type, "Confirming payment intent");

        let response = self
            .client
            .post(url)
            .bearer_auth(&session.publishable_key)
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        let body: Value = serde_json::from_slice(&body)
            .map_err(|e| FlowError::Decode(format!("Invalid confirmation response: {}", e)))?;

        if status.is_success() {
            return Ok(ConfirmOutcome::succeeded(body));
        }

        let error = match body.get("error") {
            Some(error) => serde_json::from_value::<SdkError>(error.clone())
                .map_err(|e| FlowError::Decode(format!("Invalid error response: {}", e)))?,
            None => SdkError {
                message: format!("Payment provider returned {}", status),
                ..SdkError::default()
            },
        };
        tracing::warn!(%status, code = ?error.code, "Payment confirmation declined");
        Ok(ConfirmOutcome::failed(error))
    }
}

/// Intent id embedded in a client secret (`pi_123_secret_abc` → `pi_123`).
pub fn intent_id_from_secret(client_secret: &str) -> Result<&str, FlowError> {
    match client_secret.split_once(SECRET_SEPARATOR) {
        Some((id, secret)) if !id.is_empty() && !secret.is_empty() => Ok(id),
        _ => Err(FlowError::Sdk(
            "Invalid client secret: expected '<intent id>_secret_<secret>'".to_string(),
        )),
    }
}

/// Flatten confirmation params into the provider's bracketed form fields.
fn encode_confirm_params(params: &ConfirmParams, return_url: &str) -> Vec<(String, String)> {
    let mut form = vec![(
        "payment_method_data[type]".to_string(),
        params.payment_method_type.to_lowercase(),
    )];

    if let Some(billing) = &params.payment_method_data.billing_details {
        push_contact(&mut form, "payment_method_data[billing_details]", billing, true);
    }
    // `shipping` has no email field.
    if let Some(shipping) = &params.payment_method_data.shipping_details {
        push_contact(&mut form, "shipping", shipping, false);
    }

    form.push(("return_url".to_string(), return_url.to_string()));
    form
}

fn push_contact(
    form: &mut Vec<(String, String)>,
    prefix: &str,
    contact: &ContactDetails,
    with_email: bool,
) {
    push_field(form, prefix, "name", contact.name.as_deref());
    push_field(form, prefix, "phone", contact.phone.as_deref());
    if with_email {
        push_field(form, prefix, "email", contact.email.as_deref());
    }
    push_address(form, &format!("{}[address]", prefix), &contact.address);
}

fn push_address(form: &mut Vec<(String, String)>, prefix: &str, address: &Address) {
    push_field(form, prefix, "line1", address.line1.as_deref());
    push_field(form, prefix, "line2", address.line2.as_deref());
    push_field(form, prefix, "city", address.city.as_deref());
    push_field(form, prefix, "state", address.state.as_deref());
    push_field(form, prefix, "postal_code", address.postal_code.as_deref());
    push_field(form, prefix, "country", address.country.as_deref());
}

fn push_field(form: &mut Vec<(String, String)>, prefix: &str, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        form.push((format!("{}[{}]", prefix, key), value.to_string()));
    }
}

/// Keep the mode prefix and the last four characters of a key.
fn redact(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 12 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::PaymentMethodData;

    fn lookup<'a>(form: &'a [(String, String)], key: &str) -> Option<&'a str> {
        form.iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn intent_id_is_prefix_of_secret() {
        assert_eq!(intent_id_from_secret("pi_123_secret_abc").unwrap(), "pi_123");
        assert!(intent_id_from_secret("secret_abc").is_err());
        assert!(intent_id_from_secret("pi_123_secret_").is_err());
    }

    #[test]
    fn form_uses_bracketed_keys() {
        let params = ConfirmParams {
            payment_method_type: "Klarna".into(),
            payment_method_data: PaymentMethodData {
                shipping_details: Some(ContactDetails {
                    address: Address {
                        city: Some("Houston".into()),
                        postal_code: Some("77063".into()),
                        ..Address::default()
                    },
                    email: Some("myemail@s.com".into()),
                    name: Some("John Doe".into()),
                    phone: None,
                }),
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

        let form = encode_confirm_params(&params, "demo://safepay");
        assert_eq!(lookup(&form, "payment_method_data[type]"), Some("klarna"));
        assert_eq!(
            lookup(&form, "payment_method_data[billing_details][email]"),
            Some("customer@email.us")
        );
        assert_eq!(
            lookup(&form, "payment_method_data[billing_details][address][country]"),
            Some("US")
        );
        assert_eq!(lookup(&form, "shipping[name]"), Some("John Doe"));
        assert_eq!(lookup(&form, "shipping[address][postal_code]"), Some("77063"));
        assert_eq!(lookup(&form, "shipping[email]"), None);
        assert_eq!(lookup(&form, "return_url"), Some("demo://safepay"));
    }

    #[test]
    fn redact_hides_middle_of_key() {
        assert_eq!(redact("pk_test_1"), "*********");
        assert_eq!(redact("pk_test_51abcdefghijWXYZ"), "pk_test_...WXYZ");
    }

    #[tokio::test]
    async fn initialize_rejects_secret_keys() {
        let sdk = StripeSdk::new(&ProviderConfig::default()).unwrap();
        let params = SdkInitParams {
            publishable_key: "sk_live_123".into(),
            merchant_identifier: "merchant".into(),
            url_scheme: "demo".into(),
            set_return_url_scheme_on_android: true,
        };
        assert!(sdk.initialize(&params).await.is_err());
        assert!(!sdk.is_initialized());
    }
}
