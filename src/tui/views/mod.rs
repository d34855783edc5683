//! TUI Views module
//!
//! One view per dashboard tab, plus the header and status bar.

pub mod customers;
pub mod delivery;
pub mod overview;
pub mod products;
pub mod segments;
pub mod sellers;
pub mod status_bar;

use ratatui::{
    layout::{Alignment, Direction, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Tabs},
    Frame,
};

use super::app::{App, DashboardTab, RangeEdge};
use super::layout::AppLayout;
use crate::display::NO_DATA;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, app, layout.header);

    match app.active_tab {
        DashboardTab::Overview => overview::render(frame, app, layout.main),
        DashboardTab::Customers => customers::render(frame, app, layout.main),
        DashboardTab::Delivery => delivery::render(frame, app, layout.main),
        DashboardTab::Sellers => sellers::render(frame, app, layout.main),
        DashboardTab::Products => products::render(frame, app, layout.main),
        DashboardTab::Segments => segments::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let titles = DashboardTab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| format!("{} {}", i + 1, tab.title()));

    let edge_style = |edge: RangeEdge| {
        if app.focused_edge == edge {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Cyan)
        }
    };
    let range_title = Line::from(vec![
        Span::raw(" "),
        Span::styled(app.range.start().to_string(), edge_style(RangeEdge::Start)),
        Span::raw(" to "),
        Span::styled(app.range.end().to_string(), edge_style(RangeEdge::End)),
        Span::raw(" "),
    ]);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Commerce Insights ")
                .title(range_title.alignment(Alignment::Right)),
        )
        .select(app.active_tab.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

/// Bordered block with a title
pub(crate) fn titled_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
}

/// Placeholder shown when the selected range has no rows
pub(crate) fn render_no_data(frame: &mut Frame, area: Rect, title: &str) {
    let paragraph = Paragraph::new(NO_DATA)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(titled_block(title));
    frame.render_widget(paragraph, area);
}

/// Horizontal bar chart of labelled counts, largest first
pub(crate) fn render_ranking_chart(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    items: &[(String, u64)],
    color: Color,
) {
    if items.is_empty() {
        render_no_data(frame, area, title);
        return;
    }

    let bars: Vec<Bar> = items
        .iter()
        .map(|(label, value)| {
            Bar::default()
                .label(Line::from(label.clone()))
                .value(*value)
                .text_value(value.to_string())
        })
        .collect();

    let chart = BarChart::default()
        .block(titled_block(title))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1)
        .bar_style(Style::default().fg(color))
        .value_style(Style::default().fg(Color::Black).bg(color))
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::tui::app::tests::{dataset, full_range};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_every_tab_renders() {
        let dataset = dataset();
        let settings = Settings::default();
        let mut app = App::new(&dataset, &settings, full_range());

        for tab in DashboardTab::ALL {
            app.select_tab(tab);
            let text = screen(&app);
            assert!(text.contains("Commerce Insights"), "{:?}", tab);
            assert!(text.contains("2018-01-05"), "{:?}", tab);
        }
    }

    #[test]
    fn test_overview_shows_cards() {
        let dataset = dataset();
        let settings = Settings::default();
        let app = App::new(&dataset, &settings, full_range());

        let text = screen(&app);
        assert!(text.contains("Total Orders"));
        assert!(text.contains("AU$ 170,00"));
    }

    #[test]
    fn test_empty_range_shows_placeholder() {
        let dataset = dataset();
        let settings = Settings::default();
        let mut app = App::new(
            &dataset,
            &settings,
            crate::models::DateRange::parse("2018-01-10", "2018-01-20").unwrap(),
        );
        app.select_tab(DashboardTab::Delivery);

        assert!(screen(&app).contains(NO_DATA));
    }
}
