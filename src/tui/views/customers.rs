//! Customers tab
//!
//! Top cities and states by distinct customers.

use ratatui::{layout::Rect, style::Color, Frame};

use super::render_ranking_chart;
use crate::reports::CustomerCount;
use crate::tui::app::App;
use crate::tui::layout::split_columns;

fn chart_items(counts: &[CustomerCount], top: usize) -> Vec<(String, u64)> {
    counts
        .iter()
        .take(top)
        .map(|c| (c.key.clone(), c.customers as u64))
        .collect()
}

/// Render the customers tab
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let (left, right) = split_columns(area);
    let top_n = &app.settings.top_n;

    render_ranking_chart(
        frame,
        left,
        &format!("Top {} Cities by Customers", top_n.cities),
        &chart_items(&app.dashboard.customers_by_city, top_n.cities),
        Color::Cyan,
    );
    render_ranking_chart(
        frame,
        right,
        &format!("Top {} States by Customers", top_n.states),
        &chart_items(&app.dashboard.customers_by_state, top_n.states),
        Color::Magenta,
    );
}
