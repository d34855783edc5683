//! Overview tab
//!
//! Summary cards and the monthly orders and revenue sparklines.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Sparkline},
    Frame,
};

use super::{render_no_data, titled_block};
use crate::display::SummaryCards;
use crate::reports::fill_month_gaps;
use crate::tui::app::App;
use crate::tui::layout::OverviewLayout;

/// Render the overview tab
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = OverviewLayout::new(area);
    let cards = SummaryCards::from_dashboard(&app.dashboard, &app.settings.currency);

    let entries = [
        ("Total Orders", cards.total_orders, Color::Cyan),
        ("Total Revenue", cards.total_revenue, Color::Green),
        ("Customers", cards.customers, Color::Magenta),
        ("Order Lines", cards.order_lines, Color::Yellow),
    ];
    for ((title, value, color), card_area) in entries.into_iter().zip(layout.cards) {
        let card = Paragraph::new(Line::from(value))
            .alignment(Alignment::Center)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .block(titled_block(title));
        frame.render_widget(card, card_area);
    }

    let monthly = fill_month_gaps(&app.dashboard.monthly);
    if monthly.is_empty() {
        render_no_data(frame, layout.orders_chart, "Monthly Orders");
        render_no_data(frame, layout.revenue_chart, "Monthly Revenue");
        return;
    }

    let orders: Vec<u64> = monthly.iter().map(|p| p.order_count as u64).collect();
    let revenue: Vec<u64> = monthly
        .iter()
        .map(|p| p.revenue.cents().max(0) as u64)
        .collect();
    let span = match (monthly.first(), monthly.last()) {
        (Some(first), Some(last)) => format!("{} to {}", first.month, last.month),
        _ => String::new(),
    };

    let orders_chart = Sparkline::default()
        .block(titled_block(&format!("Monthly Orders, {}", span)))
        .data(&orders)
        .style(Style::default().fg(Color::Cyan));
    frame.render_widget(orders_chart, layout.orders_chart);

    let revenue_chart = Sparkline::default()
        .block(titled_block(&format!("Monthly Revenue, {}", span)))
        .data(&revenue)
        .style(Style::default().fg(Color::Green));
    frame.render_widget(revenue_chart, layout.revenue_chart);
}
