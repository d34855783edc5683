//! Layout definitions for the TUI
//!
//! Header with tabs and the selected range, the active view, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Tabs and date range
    pub header: Rect,
    /// Active tab content
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tabs
                Constraint::Min(5),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            main: chunks[1],
            status_bar: chunks[2],
        }
    }
}

/// Layout for the overview tab
pub struct OverviewLayout {
    /// Four summary cards in a row
    pub cards: [Rect; 4],
    pub orders_chart: Rect,
    pub revenue_chart: Rect,
}

impl OverviewLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Cards
                Constraint::Min(3),    // Orders sparkline
                Constraint::Min(3),    // Revenue sparkline
            ])
            .split(area);

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(rows[0]);

        Self {
            cards: [cards[0], cards[1], cards[2], cards[3]],
            orders_chart: rows[1],
            revenue_chart: rows[2],
        }
    }
}

/// Split an area into two equal columns
pub fn split_columns(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    (chunks[0], chunks[1])
}
