use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let program = app.program();

    let lines = match &app.result {
        Some(result) => vec![
            Line::from(""),
            Line::from(Span::styled(
                result.formatted(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "{} {} {} = {}",
                    app.quantity.value().trim(),
                    program.display_name(),
                    program.unit_label(),
                    result.formatted()
                ),
                Style::default().fg(Color::Gray),
            )),
        ],
        // Neutral empty state while the quantity is missing or invalid.
        None => vec![
            Line::from(""),
            Line::from(Span::raw(program.category().icon())),
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "Enter {} amount and select currency to calculate value",
                    program.unit_label()
                ),
                Style::default().fg(Color::Gray),
            )),
        ],
    };

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Calculation Result")
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(paragraph, area);
}
