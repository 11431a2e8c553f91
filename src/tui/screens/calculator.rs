use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::program::Currency;
use crate::tui::{app::App, components};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(9),    // Input + result
            Constraint::Length(9), // Rate disclosure panel
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(vertical[0]);

    render_input_panel(frame, columns[0], app);
    components::result::render(frame, columns[1], app);
    components::rate_panel::render(frame, vertical[1], app);
}

fn render_input_panel(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Quantity field
            Constraint::Length(3), // Currency selector
            Constraint::Min(0),
        ])
        .split(area);

    let program = app.program();

    let input = Paragraph::new(app.quantity.value()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(
                "{} Amount ({})",
                capitalize(program.unit_label()),
                program.display_name()
            ))
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(input, chunks[0]);

    // Place the cursor inside the quantity field.
    frame.set_cursor(
        chunks[0].x + 1 + app.quantity.visual_cursor() as u16,
        chunks[0].y + 1,
    );

    let mut spans = Vec::new();
    for (i, currency) in Currency::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if *currency == app.currency() {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", currency.code()), style));
    }

    let selector = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Currency Type")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(selector, chunks[1]);
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
