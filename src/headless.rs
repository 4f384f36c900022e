//! Non-interactive run of the whole checkout.

use std::io::{self, Write};

use crate::backend::PaymentBackend;
use crate::flow::{FlowAction, FlowState, PaymentFlowController};
use crate::sdk::PaymentSdk;

/// Trigger every step in order, printing the state after each one.
///
/// Stops at the first `Error`, like the screen does: no step offers a way
/// out of it. Returns the last state.
pub async fn run_headless<B, S, W>(
    controller: &PaymentFlowController<B, S>,
    out: &mut W,
) -> io::Result<FlowState>
where
    B: PaymentBackend,
    S: PaymentSdk,
    W: Write,
{
    for action in FlowAction::SEQUENCE {
        writeln!(out, "> {}", action.label())?;
        controller.run(action).await;

        let state = controller.state();
        writeln!(out, "{}", state)?;
        out.flush()?;

        if state.is_error() {
            return Ok(state);
        }
    }

    Ok(controller.state())
}
