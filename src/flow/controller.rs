//! Payment flow controller.
//!
//! Owns the flow state and runs the three checkout steps. Each step enters
//! `Loading` while its remote calls run, then settles on exactly one state.
//! The state is published through a watch channel so the view reads
//! snapshots and never writes.

use serde_json::Value;
use tokio::sync::watch;

use crate::backend::PaymentBackend;
use crate::mvi::Reducer;
use crate::sdk::{PaymentSdk, SdkInitParams};

use super::defaults::FlowDefaults;
use super::error::FlowError;
use super::intent::FlowIntent;
use super::reducer::FlowReducer;
use super::state::{FlowAction, FlowState};

pub struct PaymentFlowController<B, S> {
    backend: B,
    sdk: S,
    defaults: FlowDefaults,
    state: watch::Sender<FlowState>,
}

impl<B, S> PaymentFlowController<B, S>
where
    B: PaymentBackend,
    S: PaymentSdk,
{
    /// Create a controller in `Landing`.
    pub fn new(backend: B, sdk: S, defaults: FlowDefaults) -> Self {
        let (state, _) = watch::channel(FlowState::default());
        Self {
            backend,
            sdk,
            defaults,
            state,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FlowState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every transition.
    pub fn subscribe(&self) -> watch::Receiver<FlowState> {
        self.state.subscribe()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn sdk(&self) -> &S {
        &self.sdk
    }

    /// Run the step behind `action`.
    pub async fn run(&self, action: FlowAction) {
        match action {
            FlowAction::InitializeSdk => self.initialize_sdk().await,
            FlowAction::CreatePaymentIntent => self.create_payment_intent().await,
            FlowAction::ConfirmPayment => self.confirm_payment().await,
        }
    }

    /// Fetch a publishable key and initialize the SDK with it.
    ///
    /// Ends in `SdkReady` or `Error`.
    pub async fn initialize_sdk(&self) {
        self.dispatch(FlowIntent::Begin);
        let outcome = self
            .try_initialize_sdk()
            .await
            .map(|()| FlowIntent::SdkInitialized);
        self.settle(outcome);
    }

    /// Ask the backend for a payment intent.
    ///
    /// Does not look at the current state. Ends in `IntentCreated` or `Error`.
    pub async fn create_payment_intent(&self) {
        self.dispatch(FlowIntent::Begin);
        let outcome = self
            .try_create_payment_intent()
            .await
            .map(|client_secret| FlowIntent::PaymentIntentCreated { client_secret });
        self.settle(outcome);
    }

    /// Confirm the created payment intent through the SDK.
    ///
    /// Only valid from `IntentCreated`; from any other state this fails with
    /// `Invalid state` without entering `Loading` or calling the SDK.
    pub async fn confirm_payment(&self) {
        let client_secret = self.state.borrow().client_secret().map(str::to_owned);
        let Some(client_secret) = client_secret else {
            self.settle(Err(FlowError::InvalidState));
            return;
        };

        self.dispatch(FlowIntent::Begin);
        let outcome = self
            .try_confirm_payment(&client_secret)
            .await
            .map(|message| FlowIntent::PaymentConfirmed { message });
        self.settle(outcome);
    }

    async fn try_initialize_sdk(&self) -> Result<(), FlowError> {
        let response = self
            .backend
            .fetch_publishable_key(self.defaults.key_payment_method.as_deref())
            .await?;

        if let Some(error) = response.reported_error() {
            return Err(FlowError::Remote {
                payload: error.clone(),
            });
        }

        let publishable_key = response.publishable_key()?.to_string();
        let params = SdkInitParams::new(publishable_key, &self.defaults.merchant);
        self.sdk.initialize(&params).await
    }

    async fn try_create_payment_intent(&self) -> Result<String, FlowError> {
        let response = self
            .backend
            .create_payment_intent(&self.defaults.order)
            .await?;

        if let Some(error) = response.reported_error() {
            return Err(FlowError::Remote {
                payload: error.clone(),
            });
        }

        match response.client_secret()? {
            "" => Err(FlowError::Decode(
                "Missing clientSecret in payment intent response".to_string(),
            )),
            client_secret => Ok(client_secret.to_string()),
        }
    }

    async fn try_confirm_payment(&self, client_secret: &str) -> Result<String, FlowError> {
        let outcome = self
            .sdk
            .confirm_payment(client_secret, &self.defaults.confirm)
            .await?;

        if let Some(error) = outcome.error {
            return Err(FlowError::Sdk(error.message));
        }

        let payment_intent = outcome.payment_intent.unwrap_or(Value::Null);
        serde_json::to_string_pretty(&payment_intent).map_err(|e| FlowError::Decode(e.to_string()))
    }

    /// Map a finished call to its intent and dispatch it.
    fn settle(&self, outcome: Result<FlowIntent, FlowError>) {
        let intent = outcome.unwrap_or_else(|error| FlowIntent::Failed {
            message: error.to_string(),
        });
        self.dispatch(intent);
    }

    fn dispatch(&self, intent: FlowIntent) {
        self.state.send_modify(|state| {
            *state = FlowReducer::reduce(std::mem::take(state), intent);
        });

        let state = self.state.borrow();
        match &*state {
            FlowState::Loading => tracing::debug!("Payment flow waiting on remote call"),
            FlowState::Error { message } => {
                tracing::warn!(error = %message, "Payment flow step failed")
            }
            other => tracing::info!(state = other.kind(), "Payment flow advanced"),
        }
    }

    #[cfg(test)]
    fn force_state(&self, state: FlowState) {
        self.state.send_replace(state);
    }
}
