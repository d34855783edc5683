//! Sellers tab
//!
//! Best and worst performing sellers by revenue, side by side.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Cell, Row, Table},
    Frame,
};

use super::{render_no_data, titled_block};
use crate::config::CurrencyFormat;
use crate::reports::SellerRevenue;
use crate::tui::app::App;
use crate::tui::layout::split_columns;

fn seller_table(sellers: &[SellerRevenue], currency: &CurrencyFormat, title: &str) -> Table<'static> {
    let header = Row::new(vec!["#", "Seller", "Revenue"]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = sellers
        .iter()
        .enumerate()
        .map(|(i, s)| {
            Row::new(vec![
                Cell::from((i + 1).to_string()),
                Cell::from(s.seller_id.to_string()),
                Cell::from(currency.format(s.revenue)),
            ])
        })
        .collect();

    Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(20),
        ],
    )
    .header(header)
    .block(titled_block(title))
}

/// Render the sellers tab
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let (left, right) = split_columns(area);
    let report = &app.dashboard.sellers;
    let top = app.settings.top_n.sellers;
    let currency = &app.settings.currency;

    if report.is_empty() {
        render_no_data(frame, left, "Best Performing Sellers");
        render_no_data(frame, right, "Worst Performing Sellers");
        return;
    }

    frame.render_widget(
        seller_table(report.best(top), currency, "Best Performing Sellers"),
        left,
    );
    frame.render_widget(
        seller_table(report.worst(top), currency, "Worst Performing Sellers"),
        right,
    );
}
