use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::{
    app::{App, Screen},
    components, screens,
};

pub fn render_ui(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Status bar
        ])
        .split(frame.size());

    components::header::render(frame, chunks[0], app);

    match app.current_screen {
        Screen::Calculator => screens::calculator::render(frame, chunks[1], app),
        Screen::Rates => screens::rates::render(frame, chunks[1], app),
        Screen::Reviews => screens::reviews::render(frame, chunks[1], app),
        Screen::Settings => screens::settings::render(frame, chunks[1], app),
    }

    render_status_bar(frame, chunks[2], app);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let screen_indicator = match app.current_screen {
        Screen::Calculator => "Calculator",
        Screen::Rates => "Rates",
        Screen::Reviews => "Reviews",
        Screen::Settings => "Settings",
    };

    let keys = match app.current_screen {
        Screen::Calculator => "←/→: Currency | ↑/↓: Program | Enter: Calculate",
        Screen::Rates => "↑/↓: Program",
        Screen::Reviews => "↑/↓: Select | d: Delete | r: Refresh",
        Screen::Settings => "",
    };

    let text = Line::from(vec![
        Span::styled(
            format!(" {} ", screen_indicator),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(app.status_message.clone(), Style::default().fg(Color::Gray)),
        Span::raw(" | "),
        Span::styled(keys, Style::default().fg(Color::Yellow)),
        Span::raw(" | "),
        Span::styled("Tab: Next Screen", Style::default().fg(Color::Yellow)),
        Span::raw(" | "),
        Span::styled("Esc: Quit", Style::default().fg(Color::Red)),
    ]);

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
