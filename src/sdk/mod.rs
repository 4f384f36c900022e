//! Payment SDK seam.
//!
//! The flow only needs two calls from the provider's client library:
//! initialize it with a publishable key, then confirm a payment intent.

mod stripe;
mod types;

use async_trait::async_trait;

use crate::flow::FlowError;

pub use stripe::{intent_id_from_secret, StripeSdk};
pub use types::{
    Address, ConfirmOutcome, ConfirmParams, ContactDetails, PaymentMethodData, SdkError,
    SdkInitParams,
};

/// Client-side payment SDK.
#[async_trait]
pub trait PaymentSdk: Send + Sync {
    /// Configure the SDK for the merchant. Must succeed before confirming.
    async fn initialize(&self, params: &SdkInitParams) -> Result<(), FlowError>;

    /// Confirm the payment intent identified by `client_secret`.
    ///
    /// A declined payment is `Ok` with `ConfirmOutcome::error` set; `Err` is
    /// reserved for calls that could not be made or understood.
    async fn confirm_payment(
        &self,
        client_secret: &str,
        params: &ConfirmParams,
    ) -> Result<ConfirmOutcome, FlowError>;
}
