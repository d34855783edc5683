//! Event handler for the TUI
//!
//! Routes keyboard events to tab switching and range adjustment.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, DashboardTab, RangeEdge};
use super::event::Event;
use crate::models::Step;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.expire_status();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),

        // Tabs
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.previous_tab(),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if let Some(tab) = c.to_digit(10).and_then(DashboardTab::from_number) {
                app.select_tab(tab);
            }
        }

        // Range
        KeyCode::Char('s') => app.focus(RangeEdge::Start),
        KeyCode::Char('e') => app.focus(RangeEdge::End),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
            app.shift_range(Step::Days(1))
        }
        KeyCode::Char('-') | KeyCode::Left => app.shift_range(Step::Days(-1)),
        KeyCode::Char('>') | KeyCode::Char('.') | KeyCode::Up => {
            app.shift_range(Step::Months(1))
        }
        KeyCode::Char('<') | KeyCode::Char(',') | KeyCode::Down => {
            app.shift_range(Step::Months(-1))
        }
        KeyCode::Char('r') => app.reset_range(),

        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::tui::app::tests::{dataset, full_range};
    use chrono::NaiveDate;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    #[test]
    fn test_quit_keys() {
        let dataset = dataset();
        let settings = Settings::default();

        let mut app = App::new(&dataset, &settings, full_range());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = App::new(&dataset, &settings, full_range());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_tab_keys() {
        let dataset = dataset();
        let settings = Settings::default();
        let mut app = App::new(&dataset, &settings, full_range());

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_tab, DashboardTab::Customers);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.active_tab, DashboardTab::Segments);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.active_tab, DashboardTab::Delivery);
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.active_tab, DashboardTab::Delivery);
    }

    #[test]
    fn test_range_keys() {
        let dataset = dataset();
        let settings = Settings::default();
        let mut app = App::new(&dataset, &settings, full_range());

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.focused_edge, RangeEdge::End);
        press(&mut app, KeyCode::Char('<'));
        assert_eq!(app.range.end(), NaiveDate::from_ymd_opt(2018, 2, 20).unwrap());
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.range.end(), NaiveDate::from_ymd_opt(2018, 2, 19).unwrap());

        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.range.start(), NaiveDate::from_ymd_opt(2018, 1, 6).unwrap());
        assert_eq!(app.dashboard.totals.order_lines, 1);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.range, full_range());
    }
}
