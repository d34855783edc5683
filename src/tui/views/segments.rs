//! Segments tab
//!
//! Customers per named RFM segment.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup},
    Frame,
};

use super::{render_no_data, titled_block};
use crate::reports::CustomerSegment;
use crate::tui::app::App;

const TITLE: &str = "Customer Segments";

fn segment_color(segment: CustomerSegment) -> Color {
    match segment {
        CustomerSegment::Champion => Color::Green,
        CustomerSegment::Loyal => Color::Cyan,
        CustomerSegment::AtRisk => Color::Yellow,
        CustomerSegment::Lost => Color::Red,
    }
}

/// Render the segments tab
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let counts = &app.dashboard.segments;
    if counts.is_empty() {
        render_no_data(frame, area, TITLE);
        return;
    }

    let bars: Vec<Bar> = counts
        .iter()
        .map(|c| {
            Bar::default()
                .label(Line::from(c.segment.label()))
                .value(c.customers as u64)
                .style(Style::default().fg(segment_color(c.segment)))
        })
        .collect();

    let unsegmented = app.dashboard.customers.len()
        - counts.iter().map(|c| c.customers).sum::<usize>();
    let title = format!("{} ({} customers without a segment)", TITLE, unsegmented);

    let chart = BarChart::default()
        .block(titled_block(&title))
        .bar_width(20)
        .bar_gap(3)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
