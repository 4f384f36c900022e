//! The checkout state machine.
//!
//! Three steps, each user-triggered:
//! 1. provision a publishable key and initialize the payment SDK
//! 2. create a payment intent on the backend
//! 3. confirm the payment intent through the SDK
//!
//! `FlowState` is the model, `FlowIntent` the outcomes, `FlowReducer` the
//! only place transitions happen, and `PaymentFlowController` the single
//! writer that performs the calls.

mod controller;
mod defaults;
mod error;
mod intent;
mod reducer;
mod state;

pub use controller::PaymentFlowController;
pub use defaults::FlowDefaults;
pub use error::FlowError;
pub use intent::FlowIntent;
pub use reducer::FlowReducer;
pub use state::{FlowAction, FlowState};
