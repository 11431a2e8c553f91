use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::storage::models::ReviewSource;
use crate::tui::app::App;
use crate::utils;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .reviews
        .iter()
        .map(|review| {
            let source_tag = match review.source {
                ReviewSource::Submitted => {
                    Span::styled(format!("#{} ", review.id), Style::default().fg(Color::Cyan))
                }
                ReviewSource::Showcase => Span::styled("   ", Style::default()),
            };

            let header = Line::from(vec![
                source_tag,
                Span::raw(review.category.icon()),
                Span::raw(" "),
                Span::styled(
                    review.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(review.stars(), Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("  {}", review.created_at.format("%Y-%m-%d")),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);

            let mut lines = vec![
                header,
                Line::from(Span::styled(
                    utils::truncate(&review.content, 90),
                    Style::default().fg(Color::Gray),
                )),
            ];
            if let (Some(points), Some(value)) =
                (&review.points_amount, &review.calculated_value)
            {
                lines.push(Line::from(Span::styled(
                    format!("{} → {}", points, value),
                    Style::default().fg(Color::Green),
                )));
            }

            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("What Our Users Say")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(Style::default().bg(Color::Rgb(40, 40, 60)));

    let mut state = ListState::default();
    if !app.reviews.is_empty() {
        state.select(Some(app.selected_review));
    }

    frame.render_stateful_widget(list, area, &mut state);
}
