use serde::Deserialize;

use crate::backend::OrderRequest;
use crate::sdk::{Address, ContactDetails};

/// Root configuration container.
///
/// Every section is optional; missing values fall back to the demo checkout.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub merchant: MerchantConfig,
    #[serde(default)]
    pub order: OrderRequest,
    #[serde(default)]
    pub payment_method: PaymentMethodConfig,
}

/// Demo backend serving keys and payment intents.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BackendConfig {
    /// Base URL, without the endpoint path.
    #[serde(default = "default_backend_base_url")]
    pub base_url: String,
    /// Value of the `paymentMethod` query on key requests.
    /// Unset sends the literal `undefined`.
    #[serde(default)]
    pub payment_method: Option<String>,
    /// Total request timeout in seconds. Unset means no timeout.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    /// Connection timeout in seconds. Unset means no timeout.
    #[serde(default)]
    pub connect_timeout_seconds: Option<u64>,
}

/// Payment provider REST API used to confirm payments.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_provider_api_base")]
    pub api_base: String,
}

/// Merchant/app identifiers handed to the SDK on initialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MerchantConfig {
    pub merchant_identifier: String,
    pub url_scheme: String,
    pub set_return_url_scheme_on_android: bool,
}

/// Payment method and contact details used when confirming.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PaymentMethodConfig {
    /// Provider spelling, e.g. `Klarna`.
    #[serde(rename = "type")]
    pub method_type: String,
    pub shipping: Option<ContactDetails>,
    pub billing: Option<ContactDetails>,
}

fn default_backend_base_url() -> String {
    "https://rigorous-heartbreaking-cephalopod.glitch.me".to_string()
}

fn default_provider_api_base() -> String {
    "https://api.stripe.com".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_backend_base_url(),
            payment_method: None,
            timeout_seconds: None,
            connect_timeout_seconds: None,
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_base: default_provider_api_base(),
        }
    }
}

impl Default for MerchantConfig {
    fn default() -> Self {
        Self {
            merchant_identifier: "merchant.com.stripe.react.native".to_string(),
            url_scheme: "stripe-klarna-demo".to_string(),
            set_return_url_scheme_on_android: true,
        }
    }
}

impl Default for OrderRequest {
    fn default() -> Self {
        Self {
            email: "customer@email.se".to_string(),
            currency: "usd".to_string(),
            items: vec!["id-1".to_string()],
            payment_method_types: vec!["klarna".to_string()],
        }
    }
}

impl Default for PaymentMethodConfig {
    fn default() -> Self {
        Self {
            method_type: "Klarna".to_string(),
            shipping: Some(ContactDetails {
                address: Address {
                    city: Some("Houston".to_string()),
                    country: Some("US".to_string()),
                    line1: Some("1459  Circle Drive".to_string()),
                    line2: None,
                    state: Some("Texas".to_string()),
                    postal_code: Some("77063".to_string()),
                },
                email: Some("myemail@s.com".to_string()),
                name: Some("John Doe".to_string()),
                phone: None,
            }),
            billing: Some(ContactDetails {
                address: Address {
                    country: Some("US".to_string()),
                    ..Address::default()
                },
                email: Some("customer@email.us".to_string()),
                ..ContactDetails::default()
            }),
        }
    }
}
