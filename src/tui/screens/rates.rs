use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::{app::App, components};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(9), Constraint::Length(3)])
        .split(area);

    components::rate_panel::render(frame, chunks[0], app);

    let note = Paragraph::new(
        "* Exchange rates are for reference only. Actual redemption values may vary.",
    )
    .style(Style::default().fg(Color::Gray))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(note, chunks[1]);
}
