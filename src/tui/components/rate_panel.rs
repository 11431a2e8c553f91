use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::tui::app::App;
use crate::valuation::{format_rate, reference_rows};

/// Rate disclosure panel: what the program's two reference quantities are
/// worth in every currency, computed through the same valuation path as the
/// main result.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let program = app.program();
    let [small, large] = program.reference_quantities();
    let unit = program.unit_label();

    let header = Row::new(vec![
        Cell::from("Currency"),
        Cell::from("Rate"),
        Cell::from(format!("{} {}", small, unit)),
        Cell::from(format!("{} {}", large, unit)),
    ])
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = reference_rows(program)
        .into_iter()
        .map(|row| {
            let selected = row.currency == app.currency();
            let style = if selected {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Row::new(vec![
                Cell::from(row.currency.code()),
                Cell::from(format_rate(program.rates().rate(row.currency))),
                Cell::from(row.formatted_value(0)),
                Cell::from(row.formatted_value(1)),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(22),
            Constraint::Length(22),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Current Exchange Rates")
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(table, area);
}
