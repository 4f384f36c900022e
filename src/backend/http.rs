use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::config::BackendConfig;
use crate::flow::FlowError;

use super::types::{IntentResponse, KeyResponse, OrderRequest};
use super::PaymentBackend;

/// Query value sent when no payment method is configured.
///
/// The demo server has always received the literal string, so it is kept.
pub const UNSET_QUERY_VALUE: &str = "undefined";

/// `PaymentBackend` over HTTP.
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Build a client for `config.base_url`.
    ///
    /// Timeouts are only applied when configured.
    pub fn new(config: &BackendConfig) -> Result<Self, FlowError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.connect_timeout_seconds {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl PaymentBackend for HttpBackend {
    async fn fetch_publishable_key(
        &self,
        payment_method: Option<&str>,
    ) -> Result<KeyResponse, FlowError> {
        let url = self.endpoint("stripe-key");
        tracing::debug!(%url, "Fetching publishable key");

        let response = self
            .client
            .get(url)
            .query(&[("paymentMethod", payment_method.unwrap_or(UNSET_QUERY_VALUE))])
            .send()
            .await?;

        decode_json(response, "key").await
    }

    async fn create_payment_intent(
        &self,
        order: &OrderRequest,
    ) -> Result<IntentResponse, FlowError> {
        let url = self.endpoint("create-payment-intent");
        tracing::debug!(%url, currency = %order.currency, "Creating payment intent");

        let response = self.client.post(url).json(order).send().await?;

        decode_json(response, "payment intent").await
    }
}

/// Parse the body as JSON regardless of status code.
///
/// The demo server reports failures in the body, often with a 4xx/5xx status,
/// so the status alone never decides the outcome.
async fn decode_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T, FlowError> {
    let status = response.status();
    if !status.is_success() {
        tracing::debug!(%status, "{} endpoint returned a non-success status", what);
    }

    let body = response.bytes().await?;
    serde_json::from_slice(&body)
        .map_err(|e| FlowError::Decode(format!("Invalid {} response: {}", what, e)))
}
