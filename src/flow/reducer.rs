use crate::mvi::Reducer;

use super::intent::FlowIntent;
use super::state::FlowState;

/// Reducer for the payment flow.
///
/// Each intent maps to exactly one state; the previous state only matters to
/// the controller, which checks preconditions before dispatching.
pub struct FlowReducer;

impl Reducer for FlowReducer {
    type State = FlowState;
    type Intent = FlowIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FlowIntent::Begin => FlowState::Loading,
            FlowIntent::SdkInitialized => FlowState::SdkReady,
            FlowIntent::PaymentIntentCreated { client_secret } => {
                FlowState::IntentCreated { client_secret }
            }
            FlowIntent::PaymentConfirmed { message } => FlowState::Success { message },
            FlowIntent::Failed { message } => FlowState::Error { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_enters_loading_from_any_state() {
        let states = [
            FlowState::Landing,
            FlowState::SdkReady,
            FlowState::Error {
                message: "old".into(),
            },
        ];
        for state in states {
            assert_eq!(
                FlowReducer::reduce(state, FlowIntent::Begin),
                FlowState::Loading
            );
        }
    }

    #[test]
    fn created_intent_carries_client_secret() {
        let state = FlowReducer::reduce(
            FlowState::Loading,
            FlowIntent::PaymentIntentCreated {
                client_secret: "secret_abc".into(),
            },
        );
        assert_eq!(state.client_secret(), Some("secret_abc"));
    }

    #[test]
    fn failure_leaves_loading() {
        let state = FlowReducer::reduce(
            FlowState::Loading,
            FlowIntent::Failed {
                message: "card_declined".into(),
            },
        );
        assert_eq!(
            state,
            FlowState::Error {
                message: "card_declined".into()
            }
        );
    }
}
