//! Delivery tab
//!
//! Orders per delivery status with their share of the total.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Cell, Row, Table},
    Frame,
};

use super::{render_no_data, titled_block};
use crate::reports::status_shares;
use crate::tui::app::App;

const TITLE: &str = "Delivery Status";

/// Render the delivery tab
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let counts = &app.dashboard.delivery;
    if counts.is_empty() {
        render_no_data(frame, area, TITLE);
        return;
    }

    let header = Row::new(vec!["Status", "Orders", "Share"]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = counts
        .iter()
        .zip(status_shares(counts))
        .map(|(count, (_, share))| {
            Row::new(vec![
                Cell::from(count.status.clone()),
                Cell::from(count.orders.to_string()),
                Cell::from(format!("{:>5.1}%", share)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(10),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(titled_block(TITLE));

    frame.render_widget(table, area);
}
