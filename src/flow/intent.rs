use crate::mvi::Intent;

/// Outcomes the controller feeds into the flow reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowIntent {
    /// A call is about to be issued.
    Begin,

    /// The SDK accepted the provisioned key.
    SdkInitialized,

    /// The backend returned a client secret.
    PaymentIntentCreated { client_secret: String },

    /// The SDK confirmed the payment.
    PaymentConfirmed { message: String },

    /// Any failure, already rendered to its display message.
    Failed { message: String },
}

impl Intent for FlowIntent {}
