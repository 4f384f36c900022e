use crate::flow::{FlowAction, FlowState};
use tokio::sync::{mpsc, watch};

/// Channel the screen uses to hand actions to the flow worker.
pub type UiCommandSender = mpsc::Sender<FlowAction>;

/// Screen model.
///
/// Reads flow snapshots from the controller and turns key presses into
/// actions. It never writes the flow state itself.
pub struct App {
    should_quit: bool,
    flow: watch::Receiver<FlowState>,
    command_sender: Option<UiCommandSender>,
    /// Set once an action is sent; cleared when the flow state changes.
    /// Keeps a second key press from queueing the same step twice.
    awaiting_flow: bool,
    animation_tick: u8,
    scroll: u16,
    last_command_error: Option<String>,
}

impl App {
    pub fn new(flow: watch::Receiver<FlowState>) -> Self {
        Self {
            should_quit: false,
            flow,
            command_sender: None,
            awaiting_flow: false,
            animation_tick: 0,
            scroll: 0,
            last_command_error: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Current flow snapshot.
    pub fn flow_state(&self) -> FlowState {
        self.flow.borrow().clone()
    }

    /// The action whose control is shown and can be pressed right now.
    pub fn visible_action(&self) -> Option<FlowAction> {
        if self.awaiting_flow {
            return None;
        }
        self.flow.borrow().next_action()
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    /// Press the visible control, if there is one.
    pub fn trigger_visible_action(&mut self) -> bool {
        let Some(action) = self.visible_action() else {
            return false;
        };
        let sent = self.send_command(action);
        self.awaiting_flow = sent;
        sent
    }

    pub fn on_tick(&mut self) {
        if self.awaiting_flow || self.flow.borrow().is_loading() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    /// Called when the controller published a new state.
    ///
    /// Events can outlive the value they announced; one with nothing unseen
    /// behind it is ignored so it cannot re-arm the button.
    pub fn on_flow_changed(&mut self) {
        if !self.flow.has_changed().unwrap_or(false) {
            return;
        }
        if !self.flow.borrow_and_update().is_loading() {
            self.awaiting_flow = false;
        }
        self.scroll = 0;
        self.animation_tick = 0;
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    fn send_command(&mut self, action: FlowAction) -> bool {
        let Some(sender) = &self.command_sender else {
            return false;
        };

        match sender.try_send(action) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                tracing::warn!(?action, error = %err, "Failed to queue flow action");
                self.last_command_error = Some(format!("Could not start step: {}", err));
                false
            }
        }
    }
}
