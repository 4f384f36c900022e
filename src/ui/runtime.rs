use crate::backend::PaymentBackend;
use crate::flow::{FlowAction, PaymentFlowController};
use crate::sdk::PaymentSdk;
use crate::ui::app::App;
use crate::ui::events::{forward_flow_changes, AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// Queued actions beyond the one running. The screen only ever has one
/// control visible, so a small queue is plenty.
const COMMAND_QUEUE_DEPTH: usize = 4;

/// Run the checkout screen until the user quits.
///
/// Flow actions run on `runtime`; the draw loop stays on this thread.
pub fn run<B, S>(runtime: Handle, controller: Arc<PaymentFlowController<B, S>>) -> io::Result<()>
where
    B: PaymentBackend + 'static,
    S: PaymentSdk + 'static,
{
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(100);
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE_DEPTH);
    let mut app = App::new(controller.subscribe());
    app.set_command_sender(command_tx);

    let worker = runtime.spawn(run_flow_worker(Arc::clone(&controller), command_rx));
    let watcher = runtime.spawn(forward_flow_changes(controller.subscribe(), events.sender()));

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::FlowChanged) => app.on_flow_changed(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // A step still in flight is abandoned with the screen.
    worker.abort();
    watcher.abort();
    drop(guard);
    Ok(())
}

/// Run queued actions one at a time, so the controller has a single writer.
pub async fn run_flow_worker<B, S>(
    controller: Arc<PaymentFlowController<B, S>>,
    mut commands: mpsc::Receiver<FlowAction>,
) where
    B: PaymentBackend,
    S: PaymentSdk,
{
    while let Some(action) = commands.recv().await {
        tracing::debug!(?action, "Running flow action");
        controller.run(action).await;
    }
}
