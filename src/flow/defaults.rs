use crate::backend::OrderRequest;
use crate::config::{Config, MerchantConfig};
use crate::sdk::{ConfirmParams, PaymentMethodData};

/// Payloads the controller sends at each step.
///
/// `Default` is the demo checkout; tests and the config file substitute their
/// own without touching the control flow.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowDefaults {
    /// `paymentMethod` query on the key request.
    pub key_payment_method: Option<String>,
    pub order: OrderRequest,
    pub merchant: MerchantConfig,
    pub confirm: ConfirmParams,
}

impl Default for FlowDefaults {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for FlowDefaults {
    fn from(config: &Config) -> Self {
        Self {
            key_payment_method: config.backend.payment_method.clone(),
            order: config.order.clone(),
            merchant: config.merchant.clone(),
            confirm: ConfirmParams {
                payment_method_type: config.payment_method.method_type.clone(),
                payment_method_data: PaymentMethodData {
                    shipping_details: config.payment_method.shipping.clone(),
                    billing_details: config.payment_method.billing.clone(),
                },
            },
        }
    }
}
