use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::program::Program;
use crate::tui::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let settings = vec![
        ("Database", app.config.database.path.clone()),
        ("Default Program", app.config.display.default_program.clone()),
        ("Default Currency", app.config.display.default_currency.clone()),
        ("Reviews Per Day", app.config.reviews.max_per_day.to_string()),
        ("Review List Limit", app.config.reviews.list_limit.to_string()),
        ("Programs", Program::ALL.len().to_string()),
    ];

    let items: Vec<ListItem> = settings
        .iter()
        .map(|(key, value)| {
            let content = vec![
                Span::styled(format!("{:20}", key), Style::default().fg(Color::Yellow)),
                Span::raw(": "),
                Span::styled(value.clone(), Style::default().fg(Color::White)),
            ];
            ListItem::new(Line::from(content))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Configuration")
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(list, area);
}
