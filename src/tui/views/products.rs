//! Products tab

use ratatui::{layout::Rect, style::Color, Frame};

use super::render_ranking_chart;
use crate::tui::app::App;

/// Render the products tab
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let top = app.settings.top_n.products;
    let items: Vec<(String, u64)> = app
        .dashboard
        .products
        .iter()
        .take(top)
        .map(|p| (p.product_id.to_string(), p.order_items))
        .collect();

    render_ranking_chart(
        frame,
        area,
        &format!("Top {} Products by Total Order", top),
        &items,
        Color::Green,
    );
}
