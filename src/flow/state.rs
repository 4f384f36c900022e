//! Flow state for the checkout screen.

use std::fmt;

use crate::mvi::UiState;

/// The step whose trigger control is visible for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowAction {
    InitializeSdk,
    CreatePaymentIntent,
    ConfirmPayment,
}

impl FlowAction {
    /// All actions in the order the screen offers them.
    pub const SEQUENCE: [FlowAction; 3] = [
        FlowAction::InitializeSdk,
        FlowAction::CreatePaymentIntent,
        FlowAction::ConfirmPayment,
    ];

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            FlowAction::InitializeSdk => "Initiate Stripe SDK",
            FlowAction::CreatePaymentIntent => "Initiate Payment Intent",
            FlowAction::ConfirmPayment => "Confirm Payment Intent",
        }
    }
}

/// Current state of the payment flow.
///
/// Exactly one variant is active; the controller is the only writer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FlowState {
    /// Nothing started yet.
    #[default]
    Landing,

    /// A backend or SDK call is in flight.
    Loading,

    /// The last call failed. No automatic recovery.
    Error {
        /// Either the serialized remote error, the transport failure text,
        /// or `Invalid state`.
        message: String,
    },

    /// The payment SDK holds a publishable key.
    SdkReady,

    /// The backend created a payment intent.
    IntentCreated {
        /// Never empty.
        client_secret: String,
    },

    /// The payment was confirmed.
    Success {
        /// Pretty-printed payment intent.
        message: String,
    },
}

impl UiState for FlowState {}

impl FlowState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Stable lowercase name, used in logs and headless output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Loading => "loading",
            Self::Error { .. } => "error",
            Self::SdkReady => "sdk-ready",
            Self::IntentCreated { .. } => "payment-intent",
            Self::Success { .. } => "success",
        }
    }

    /// The action whose control is shown in this state.
    ///
    /// `Loading`, `Error` and `Success` show no control.
    pub fn next_action(&self) -> Option<FlowAction> {
        match self {
            Self::Landing => Some(FlowAction::InitializeSdk),
            Self::SdkReady => Some(FlowAction::CreatePaymentIntent),
            Self::IntentCreated { .. } => Some(FlowAction::ConfirmPayment),
            Self::Loading | Self::Error { .. } | Self::Success { .. } => None,
        }
    }

    pub fn client_secret(&self) -> Option<&str> {
        match self {
            Self::IntentCreated { client_secret } => Some(client_secret),
            _ => None,
        }
    }
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error { message } => write!(f, "error: {}", message),
            Self::IntentCreated { client_secret } => {
                write!(f, "payment-intent: {}", client_secret)
            }
            Self::Success { message } => write!(f, "success:\n{}", message),
            other => f.write_str(other.kind()),
        }
    }
}
