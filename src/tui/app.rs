//! Application state for the TUI
//!
//! The App struct holds the selected date range, the active tab and the
//! dashboard computed for that range. Every accepted range change
//! recomputes the dashboard.

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use tracing::debug;

use crate::config::Settings;
use crate::dataset::Dataset;
use crate::models::{DateRange, Step};
use crate::reports::Dashboard;

/// How long a status message stays on screen
const STATUS_TIMEOUT: Duration = Duration::from_secs(4);

/// Which tab is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Overview,
    Customers,
    Delivery,
    Sellers,
    Products,
    Segments,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 6] = [
        DashboardTab::Overview,
        DashboardTab::Customers,
        DashboardTab::Delivery,
        DashboardTab::Sellers,
        DashboardTab::Products,
        DashboardTab::Segments,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Customers => "Customers",
            DashboardTab::Delivery => "Delivery",
            DashboardTab::Sellers => "Sellers",
            DashboardTab::Products => "Products",
            DashboardTab::Segments => "Segments",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Tab for a 1-based number key
    pub fn from_number(n: u32) -> Option<Self> {
        let index = (n as usize).checked_sub(1)?;
        Self::ALL.get(index).copied()
    }
}

/// Which end of the range the adjustment keys move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeEdge {
    #[default]
    Start,
    End,
}

impl RangeEdge {
    pub fn label(&self) -> &'static str {
        match self {
            RangeEdge::Start => "start",
            RangeEdge::End => "end",
        }
    }
}

/// Main application state
pub struct App<'a> {
    pub dataset: &'a Dataset,

    pub settings: &'a Settings,

    /// First and last purchase dates in the dataset
    pub bounds: Option<DateRange>,

    /// Currently selected range
    pub range: DateRange,

    /// Range restored by the reset key
    initial_range: DateRange,

    pub active_tab: DashboardTab,

    pub focused_edge: RangeEdge,

    /// Tables for the current range
    pub dashboard: Dashboard,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: Option<String>,

    status_set_at: Option<Instant>,
}

impl<'a> App<'a> {
    /// Create the app; `range` is clamped to the dataset bounds
    pub fn new(dataset: &'a Dataset, settings: &'a Settings, range: DateRange) -> Self {
        let bounds = dataset.bounds();
        let range = match &bounds {
            Some(bounds) => range.clamp_to(bounds),
            None => range,
        };
        let dashboard = Dashboard::generate(dataset.filter(&range), range, &settings.segmentation);

        Self {
            dataset,
            settings,
            bounds,
            range,
            initial_range: range,
            active_tab: DashboardTab::default(),
            focused_edge: RangeEdge::default(),
            dashboard,
            should_quit: false,
            status_message: None,
            status_set_at: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_set_at = Some(Instant::now());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_set_at = None;
    }

    /// Drop the status message once it has been shown long enough
    pub fn expire_status(&mut self) {
        if let Some(set_at) = self.status_set_at {
            if set_at.elapsed() >= STATUS_TIMEOUT {
                self.clear_status();
            }
        }
    }

    pub fn next_tab(&mut self) {
        self.active_tab = self.active_tab.next();
    }

    pub fn previous_tab(&mut self) {
        self.active_tab = self.active_tab.previous();
    }

    pub fn select_tab(&mut self, tab: DashboardTab) {
        self.active_tab = tab;
    }

    pub fn focus(&mut self, edge: RangeEdge) {
        self.focused_edge = edge;
        self.set_status(format!("Adjusting {} date", edge.label()));
    }

    /// Move the focused edge of the range by `step`
    ///
    /// A step past the dataset bounds stops at the bound. A step that would
    /// leave the range unchanged or put the start after the end is rejected
    /// with a status message and the range stays as it was.
    pub fn shift_range(&mut self, step: Step) {
        let Some(bounds) = self.bounds else {
            self.set_status("No data to select a range from");
            return;
        };

        let current = self.edge_date();
        let Some(moved) = step.apply(current) else {
            self.set_status("Date out of range");
            return;
        };
        let target = moved.clamp(bounds.start(), bounds.end());

        if target == current {
            self.set_status(format!(
                "The {} date is already at the edge of the data ({})",
                self.focused_edge.label(),
                current
            ));
            return;
        }

        let candidate = match self.focused_edge {
            RangeEdge::Start => self.range.with_start(target),
            RangeEdge::End => self.range.with_end(target),
        };

        match candidate {
            Ok(range) => {
                self.apply_range(range);
                self.clear_status();
            }
            Err(_) => self.set_status("The start date cannot be after the end date"),
        }
    }

    /// Restore the range the dashboard opened with
    pub fn reset_range(&mut self) {
        self.apply_range(self.initial_range);
        self.set_status("Range reset");
    }

    fn edge_date(&self) -> NaiveDate {
        match self.focused_edge {
            RangeEdge::Start => self.range.start(),
            RangeEdge::End => self.range.end(),
        }
    }

    fn apply_range(&mut self, range: DateRange) {
        self.range = range;
        let rows = self.dataset.filter(&range);
        debug!(range = %range, rows = rows.len(), "recomputing dashboard");
        self.dashboard = Dashboard::generate(rows, range, &self.settings.segmentation);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::transaction::fixtures::row;

    pub(crate) fn dataset() -> Dataset {
        Dataset::from_rows(vec![
            row("c1", "o1", "2018-01-05", 10_000),
            row("c2", "o2", "2018-02-10", 5_000),
            row("c3", "o3", "2018-03-20", 2_000),
        ])
    }

    pub(crate) fn full_range() -> DateRange {
        DateRange::parse("2018-01-05", "2018-03-20").unwrap()
    }

    #[test]
    fn test_initial_range_is_clamped_to_bounds() {
        let dataset = dataset();
        let settings = Settings::default();
        let wide = DateRange::parse("2017-01-01", "2019-01-01").unwrap();

        let app = App::new(&dataset, &settings, wide);
        assert_eq!(app.range, full_range());
        assert_eq!(app.dashboard.totals.order_lines, 3);
    }

    #[test]
    fn test_tab_cycling() {
        assert_eq!(DashboardTab::Overview.next(), DashboardTab::Customers);
        assert_eq!(DashboardTab::Segments.next(), DashboardTab::Overview);
        assert_eq!(DashboardTab::Overview.previous(), DashboardTab::Segments);
        assert_eq!(DashboardTab::from_number(4), Some(DashboardTab::Sellers));
        assert_eq!(DashboardTab::from_number(0), None);
        assert_eq!(DashboardTab::from_number(7), None);
    }

    #[test]
    fn test_shift_start_recomputes_dashboard() {
        let dataset = dataset();
        let settings = Settings::default();
        let mut app = App::new(&dataset, &settings, full_range());

        app.focus(RangeEdge::Start);
        app.shift_range(Step::Months(1));

        assert_eq!(app.range.start(), NaiveDate::from_ymd_opt(2018, 2, 5).unwrap());
        assert_eq!(app.dashboard.totals.order_lines, 2);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_shift_past_bounds_stops_at_bound() {
        let dataset = dataset();
        let settings = Settings::default();
        let mut app = App::new(
            &dataset,
            &settings,
            DateRange::parse("2018-01-20", "2018-03-20").unwrap(),
        );

        app.focus(RangeEdge::Start);
        app.shift_range(Step::Months(-1));
        assert_eq!(app.range.start(), NaiveDate::from_ymd_opt(2018, 1, 5).unwrap());

        app.shift_range(Step::Days(-1));
        assert_eq!(app.range.start(), NaiveDate::from_ymd_opt(2018, 1, 5).unwrap());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_start_cannot_pass_end() {
        let dataset = dataset();
        let settings = Settings::default();
        let mut app = App::new(
            &dataset,
            &settings,
            DateRange::parse("2018-02-10", "2018-02-10").unwrap(),
        );

        app.focus(RangeEdge::Start);
        app.shift_range(Step::Days(1));

        assert_eq!(app.range, DateRange::parse("2018-02-10", "2018-02-10").unwrap());
        assert_eq!(
            app.status_message.as_deref(),
            Some("The start date cannot be after the end date")
        );
    }

    #[test]
    fn test_reset_restores_initial_range() {
        let dataset = dataset();
        let settings = Settings::default();
        let mut app = App::new(&dataset, &settings, full_range());

        app.focus(RangeEdge::End);
        app.shift_range(Step::Months(-1));
        assert_eq!(app.dashboard.totals.order_lines, 2);

        app.reset_range();
        assert_eq!(app.range, full_range());
        assert_eq!(app.dashboard.totals.order_lines, 3);
    }

    #[test]
    fn test_empty_dataset_rejects_moves() {
        let dataset = Dataset::from_rows(Vec::new());
        let settings = Settings::default();
        let range = DateRange::parse("2018-01-01", "2018-01-31").unwrap();
        let mut app = App::new(&dataset, &settings, range);

        app.shift_range(Step::Days(1));
        assert_eq!(app.range, range);
        assert!(app.dashboard.is_empty());
        assert!(app.status_message.is_some());
    }
}
