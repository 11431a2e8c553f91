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

    let text = Line::from(vec![
        Span::styled(
            "Points Valuator",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::raw(program.category().icon()),
        Span::raw(" "),
        Span::styled(program.display_name(), Style::default().fg(Color::White)),
        Span::styled(
            format!("  ({} → {})", program.unit_label(), app.currency().code()),
            Style::default().fg(Color::Gray),
        ),
    ]);

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
