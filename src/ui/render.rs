use crate::flow::{FlowAction, FlowState};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{BODY_TEXT, BUTTON_BACKGROUND, BUTTON_TEXT, SPINNER, STATUS_ERROR, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let state = app.flow_state();
    let (header, body, footer) = layout_regions(frame.area());

    frame.render_widget(Header::new().widget(&state), header);

    frame.render_widget(Clear, body);
    let mut lines = flow_lines(&state, app.animation_tick(), app.visible_action());
    if let Some(error) = app.last_command_error() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(STATUS_ERROR),
        )));
    }
    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll(), 0))
        .block(Block::default().borders(Borders::LEFT | Borders::RIGHT));
    frame.render_widget(content, body);

    frame.render_widget(Footer::new().widget(footer, app.visible_action()), footer);
}

/// Body content for a flow state.
///
/// One region per state: spinner while loading, the error text, or the
/// prompt and button for the next step. `button` is `None` while an action
/// is queued, which hides the control.
pub fn flow_lines(
    state: &FlowState,
    animation_tick: u8,
    button: Option<FlowAction>,
) -> Vec<Line<'static>> {
    let text = Style::default().fg(BODY_TEXT);
    let mut lines = vec![Line::from("")];

    match state {
        FlowState::Loading => lines.push(spinner_line(animation_tick)),
        FlowState::Error { message } => {
            lines.push(Line::from(vec![
                Span::styled("  Error: ", Style::default().fg(STATUS_ERROR)),
                Span::styled(message.clone(), text),
            ]));
        }
        FlowState::Landing => {
            lines.push(Line::styled(
                "  Press Enter to initiate the Stripe SDK.",
                text,
            ));
        }
        FlowState::SdkReady => {
            lines.push(Line::styled(
                "  Press Enter to initiate the payment intent.",
                text,
            ));
        }
        FlowState::IntentCreated { client_secret } => {
            lines.push(Line::styled(
                format!(
                    "  Payment intent initiated with client secret: {}",
                    client_secret
                ),
                text,
            ));
            lines.push(Line::from(""));
            lines.push(Line::styled(
                "  Press Enter to confirm the payment.",
                text,
            ));
        }
        FlowState::Success { message } => {
            lines.push(Line::styled(
                "  Payment successful!",
                Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
            ));
            lines.push(Line::from(""));
            lines.extend(
                message
                    .lines()
                    .map(|line| Line::styled(format!("  {}", line), text)),
            );
        }
    }

    match button {
        Some(action) if state.next_action() == Some(action) => {
            lines.push(Line::from(""));
            lines.push(button_line(action));
        }
        _ if state.next_action().is_some() => lines.push(spinner_line(animation_tick)),
        _ => {}
    }

    lines
}

fn spinner_line(animation_tick: u8) -> Line<'static> {
    let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];
    Line::from(vec![
        Span::styled(format!("  {} ", spinner), Style::default().fg(SPINNER)),
        Span::styled("Working...", Style::default().fg(BODY_TEXT)),
    ])
}

fn button_line(action: FlowAction) -> Line<'static> {
    let style = Style::default()
        .fg(BUTTON_TEXT)
        .bg(BUTTON_BACKGROUND)
        .add_modifier(Modifier::BOLD);
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!(" {} ", action.label()), style),
    ])
}
