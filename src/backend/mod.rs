//! Demo backend that provisions keys and creates payment intents.

mod http;
mod types;

use async_trait::async_trait;

use crate::flow::FlowError;

pub use http::{HttpBackend, UNSET_QUERY_VALUE};
pub use types::{is_truthy, IntentResponse, KeyResponse, OrderRequest};

/// Remote endpoints the payment flow talks to before handing over to the SDK.
///
/// Implementations return the decoded body even when it carries an `error`
/// field; deciding what that means is the controller's job.
#[async_trait]
pub trait PaymentBackend: Send + Sync {
    /// Fetch a publishable key for the SDK.
    ///
    /// `payment_method` is sent as the `paymentMethod` query parameter.
    async fn fetch_publishable_key(
        &self,
        payment_method: Option<&str>,
    ) -> Result<KeyResponse, FlowError>;

    /// Create a payment intent for `order`.
    async fn create_payment_intent(
        &self,
        order: &OrderRequest,
    ) -> Result<IntentResponse, FlowError>;
}
