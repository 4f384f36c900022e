use crate::flow::FlowState;
use crate::ui::theme::{
    BODY_TEXT, GLOBAL_BORDER, HEADER_BACKGROUND_DARK, HEADER_SEPARATOR, SPINNER, STATUS_ERROR,
    STATUS_OK,
};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &FlowState) -> Paragraph<'static> {
        let text_style = Style::default().fg(BODY_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (marker, label) = status_marker(state);

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("Checkout", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled("● ", Style::default().fg(marker)),
            Span::styled(label, text_style),
        ]);

        Paragraph::new(line)
            .style(Style::default().bg(HEADER_BACKGROUND_DARK))
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

fn status_marker(state: &FlowState) -> (Color, &'static str) {
    match state {
        FlowState::Landing => (HEADER_SEPARATOR, "Not started"),
        FlowState::Loading => (SPINNER, "Working"),
        FlowState::Error { .. } => (STATUS_ERROR, "Failed"),
        FlowState::SdkReady => (STATUS_OK, "SDK ready"),
        FlowState::IntentCreated { .. } => (STATUS_OK, "Payment intent created"),
        FlowState::Success { .. } => (STATUS_OK, "Paid"),
    }
}
