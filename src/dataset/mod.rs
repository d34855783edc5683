//! Transaction dataset loading and date filtering
//!
//! The dataset is read once at startup, validated against the required
//! schema and kept sorted by purchase timestamp so a date filter is two
//! binary searches returning a borrowed slice.

pub mod columns;
pub mod parser;

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use tracing::{debug, info};

use crate::error::{InsightsError, InsightsResult};
use crate::models::{DateRange, TransactionRow};

pub use columns::{ColumnIndex, REQUIRED_COLUMNS};

/// The immutable, time-ordered set of transaction rows
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    rows: Vec<TransactionRow>,
    source: Option<PathBuf>,
}

impl Dataset {
    /// Load a dataset from a CSV file
    pub fn load(path: &Path) -> InsightsResult<Self> {
        let file = File::open(path).map_err(|e| {
            InsightsError::Io(format!("Failed to open {}: {}", path.display(), e))
        })?;

        let mut dataset = Self::from_reader(file)?;
        dataset.source = Some(path.to_path_buf());

        info!(
            path = %path.display(),
            rows = dataset.len(),
            bounds = ?dataset.bounds().map(|b| b.to_string()),
            "loaded transactions"
        );
        Ok(dataset)
    }

    /// Read a dataset from any CSV source
    ///
    /// Fails on the first missing column or malformed field; no partial
    /// dataset is returned.
    pub fn from_reader<R: Read>(reader: R) -> InsightsResult<Self> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(false)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let index = ColumnIndex::from_headers(&headers)?;

        let mut rows = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            rows.push(parser::parse_record(&record, &index, idx + 1)?);
        }

        Ok(Self::from_rows(rows))
    }

    /// Build a dataset from already-parsed rows
    pub fn from_rows(mut rows: Vec<TransactionRow>) -> Self {
        rows.sort_by_key(|r| r.purchased_at);
        Self { rows, source: None }
    }

    /// All rows, oldest purchase first
    pub fn rows(&self) -> &[TransactionRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// File the dataset was loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// First and last purchase dates, or None for an empty dataset
    pub fn bounds(&self) -> Option<DateRange> {
        let first = self.rows.first()?.purchase_date();
        let last = self.rows.last()?.purchase_date();
        DateRange::new(first, last).ok()
    }

    /// Rows whose purchase date lies within `range` (inclusive)
    ///
    /// The whole end day is selected, so a purchase at 18:00 on the end date
    /// is included. Comparing timestamps against midnight of the end date
    /// would drop that day; keep the date comparison.
    pub fn filter(&self, range: &DateRange) -> &[TransactionRow] {
        let lo = self
            .rows
            .partition_point(|r| r.purchase_date() < range.start());
        let hi = self
            .rows
            .partition_point(|r| r.purchase_date() <= range.end());
        let selected = &self.rows[lo..hi.max(lo)];

        debug!(range = %range, rows = selected.len(), "filtered transactions");
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "customer_id,customer_city,customer_state,order_id,order_item_id,product_id,seller_id,order_purchase_timestamp,delivery_status,revenue";

    fn csv_with(rows: &[&str]) -> String {
        let mut out = String::from(HEADER);
        for row in rows {
            out.push('\n');
            out.push_str(row);
        }
        out
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_rows_are_sorted_by_timestamp() {
        let data = csv_with(&[
            "c2,rio,RJ,o2,1,p1,s1,2018-02-01 08:00:00,Late,20.00",
            "c1,franca,SP,o1,1,p1,s1,2017-10-02 10:56:33,On Time,10.00",
        ]);
        let dataset = Dataset::from_reader(data.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.rows()[0].customer_id.as_str(), "c1");
        let bounds = dataset.bounds().unwrap();
        assert_eq!(bounds.start(), date(2017, 10, 2));
        assert_eq!(bounds.end(), date(2018, 2, 1));
    }

    #[test]
    fn test_missing_column_fails_fast() {
        let data = "customer_id,order_id\nc1,o1\n";
        let err = Dataset::from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, InsightsError::MissingColumn { column: "customer_city" }));
    }

    #[test]
    fn test_malformed_row_reports_row_number() {
        let data = csv_with(&[
            "c1,franca,SP,o1,1,p1,s1,2017-10-02 10:56:33,On Time,10.00",
            "c2,rio,RJ,o2,1,p1,s1,sometime,Late,20.00",
        ]);
        let err = Dataset::from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, InsightsError::InvalidField { row: 2, .. }));
    }

    #[test]
    fn test_ragged_record_is_a_csv_error() {
        let data = csv_with(&["c1,franca,SP"]);
        let err = Dataset::from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, InsightsError::Csv(_)));
    }

    #[test]
    fn test_filter_is_inclusive_of_end_day() {
        let data = csv_with(&[
            "c1,franca,SP,o1,1,p1,s1,2018-01-01 00:00:00,On Time,10.00",
            "c2,rio,RJ,o2,1,p1,s1,2018-01-15 23:59:59,Late,20.00",
            "c3,rio,RJ,o3,1,p1,s1,2018-01-16 00:00:01,Late,30.00",
        ]);
        let dataset = Dataset::from_reader(data.as_bytes()).unwrap();

        let range = DateRange::new(date(2018, 1, 1), date(2018, 1, 15)).unwrap();
        let selected = dataset.filter(&range);
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[1].customer_id.as_str(), "c2");
    }

    #[test]
    fn test_filter_outside_data_is_empty() {
        let data = csv_with(&["c1,franca,SP,o1,1,p1,s1,2018-01-01 00:00:00,On Time,10.00"]);
        let dataset = Dataset::from_reader(data.as_bytes()).unwrap();

        let range = DateRange::new(date(2019, 1, 1), date(2019, 12, 31)).unwrap();
        assert!(dataset.filter(&range).is_empty());
    }

    #[test]
    fn test_empty_dataset_has_no_bounds() {
        let dataset = Dataset::from_reader(HEADER.as_bytes()).unwrap();
        assert!(dataset.is_empty());
        assert!(dataset.bounds().is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "{}",
            csv_with(&["c1,franca,SP,o1,1,p1,s1,2018-01-01 00:00:00,On Time,10.00"])
        )
        .unwrap();

        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.source(), Some(file.path()));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Dataset::load(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, InsightsError::Io(_)));
    }
}
