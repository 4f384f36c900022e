use crate::flow::FlowAction;
use crate::ui::theme::{BODY_TEXT, GLOBAL_BORDER};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, action: Option<FlowAction>) -> Paragraph<'static> {
        let hints = hint_text(action);
        let version = format!("v{} ", VERSION);

        // Char count, not bytes: the separators are multi-byte.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(BODY_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

fn hint_text(action: Option<FlowAction>) -> String {
    match action {
        Some(action) => format!(" Enter: {} │ ↑/↓: Scroll │ q: Quit", action.label()),
        None => " ↑/↓: Scroll │ q: Quit".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_names_the_visible_button() {
        assert!(
            hint_text(Some(FlowAction::ConfirmPayment)).contains("Enter: Confirm Payment Intent")
        );
        assert!(!hint_text(None).contains("Enter"));
    }
}
