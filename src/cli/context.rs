//! Shared inputs for the report commands
//!
//! Resolves the data file and the date range once so every subcommand works
//! from the same filtered set.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::Settings;
use crate::dataset::Dataset;
use crate::error::{InsightsError, InsightsResult};
use crate::models::{parse_date, DateRange, TransactionRow};
use crate::reports::Dashboard;

/// Pick the transactions file: the `--data` flag wins over the settings
pub fn resolve_data_file(arg: Option<PathBuf>, settings: &Settings) -> InsightsResult<PathBuf> {
    arg.or_else(|| settings.data_file.clone()).ok_or_else(|| {
        InsightsError::Config(
            "No transactions file given. Pass --data FILE, set INSIGHTS_DATA_FILE, \
             or set data_file in the config file"
                .into(),
        )
    })
}

/// Build the selected range, defaulting each missing end to the dataset bounds
pub fn resolve_range(
    dataset: &Dataset,
    start: Option<&str>,
    end: Option<&str>,
) -> InsightsResult<DateRange> {
    let bounds = dataset.bounds();

    let start_date = match start {
        Some(s) => parse_date(s)?,
        None => bounds.map(|b| b.start()).ok_or_else(no_bounds)?,
    };
    let end_date = match end {
        Some(e) => parse_date(e)?,
        None => bounds.map(|b| b.end()).ok_or_else(no_bounds)?,
    };

    let range = DateRange::new(start_date, end_date)?;

    match bounds {
        Some(bounds) if !range.overlaps(&bounds) => {
            warn!(range = %range, bounds = %bounds, "selected range lies outside the dataset");
        }
        _ => {}
    }

    Ok(range)
}

fn no_bounds() -> InsightsError {
    InsightsError::Validation(
        "The dataset has no rows; pass both --start and --end to choose a range".into(),
    )
}

/// Everything a report command needs
pub struct ReportContext<'a> {
    pub dataset: &'a Dataset,
    pub settings: &'a Settings,
    pub range: DateRange,
}

impl<'a> ReportContext<'a> {
    pub fn new(dataset: &'a Dataset, settings: &'a Settings, range: DateRange) -> Self {
        Self {
            dataset,
            settings,
            range,
        }
    }

    /// Rows in the selected range
    pub fn rows(&self) -> &'a [TransactionRow] {
        let rows = self.dataset.filter(&self.range);
        info!(range = %self.range, rows = rows.len(), "filtered transactions");
        rows
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::generate(self.rows(), self.range, &self.settings.segmentation)
    }

    /// Display name of the data source, used in export metadata
    pub fn source_name(&self) -> Option<String> {
        self.dataset.source().map(Path::display).map(|d| d.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transaction::fixtures::row;

    fn dataset() -> Dataset {
        Dataset::from_rows(vec![
            row("c1", "o1", "2018-01-05", 1_000),
            row("c2", "o2", "2018-03-20", 2_000),
        ])
    }

    #[test]
    fn test_range_defaults_to_bounds() {
        let range = resolve_range(&dataset(), None, None).unwrap();
        assert_eq!(range.to_string(), "2018-01-05 to 2018-03-20");

        let range = resolve_range(&dataset(), Some("2018-02-01"), None).unwrap();
        assert_eq!(range.to_string(), "2018-02-01 to 2018-03-20");
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let err = resolve_range(&dataset(), Some("2018-03-01"), Some("2018-02-01")).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let err = resolve_range(&dataset(), Some("01/02/2018"), None).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_empty_dataset_needs_explicit_range() {
        let empty = Dataset::from_rows(Vec::new());
        assert!(resolve_range(&empty, None, None).is_err());
        assert!(resolve_range(&empty, Some("2018-01-01"), Some("2018-01-31")).is_ok());
    }

    #[test]
    fn test_data_file_flag_wins() {
        let mut settings = Settings::default();
        assert!(resolve_data_file(None, &settings).is_err());

        settings.data_file = Some(PathBuf::from("/data/settings.csv"));
        assert_eq!(
            resolve_data_file(None, &settings).unwrap(),
            PathBuf::from("/data/settings.csv")
        );
        assert_eq!(
            resolve_data_file(Some(PathBuf::from("flag.csv")), &settings).unwrap(),
            PathBuf::from("flag.csv")
        );
    }
}
