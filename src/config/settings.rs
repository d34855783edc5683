//! User settings for commerce-insights
//!
//! Manages the default data file, currency display, how many rows the
//! ranking views show, and the segmentation thresholds.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::InsightsPaths;
use crate::error::InsightsError;
use crate::models::Money;
use crate::reports::SegmentationConfig;

/// How money amounts are rendered for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub thousands_separator: String,
    pub decimal_separator: String,
    /// Symbol before the amount ("AU$ 10,00") rather than after ("10,00 AU$")
    #[serde(default = "default_true")]
    pub symbol_first: bool,
    /// Space between symbol and amount
    #[serde(default = "default_true")]
    pub symbol_space: bool,
}

fn default_true() -> bool {
    true
}

impl Default for CurrencyFormat {
    // Australian dollars with es_CO grouping: "AU$ 1.234,50"
    fn default() -> Self {
        Self {
            symbol: "AU$".to_string(),
            thousands_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
            symbol_first: true,
            symbol_space: true,
        }
    }
}

impl CurrencyFormat {
    /// Format an amount with grouping, decimal separator and symbol
    pub fn format(&self, amount: Money) -> String {
        let digits = amount.units().abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push_str(&self.thousands_separator);
            }
            grouped.push(ch);
        }

        let number = format!(
            "{}{}{:02}",
            grouped,
            self.decimal_separator,
            amount.cents_part()
        );
        let space = if self.symbol_space { " " } else { "" };
        let body = if self.symbol_first {
            format!("{}{}{}", self.symbol, space, number)
        } else {
            format!("{}{}{}", number, space, self.symbol)
        };

        if amount.is_negative() {
            format!("-{}", body)
        } else {
            body
        }
    }
}

/// How many rows each ranking view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopN {
    pub cities: usize,
    pub states: usize,
    pub sellers: usize,
    pub products: usize,
}

impl Default for TopN {
    fn default() -> Self {
        Self {
            cities: 5,
            states: 5,
            sellers: 3,
            products: 5,
        }
    }
}

/// User settings for commerce-insights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Transactions CSV used when `--data` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    #[serde(default)]
    pub currency: CurrencyFormat,

    #[serde(default)]
    pub top_n: TopN,

    /// RFM bin edges, band labels and segment rules
    #[serde(default)]
    pub segmentation: SegmentationConfig,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            data_file: None,
            currency: CurrencyFormat::default(),
            top_n: TopN::default(),
            segmentation: SegmentationConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if no file exists
    pub fn load_or_create(paths: &InsightsPaths) -> Result<Self, InsightsError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| InsightsError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            InsightsError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        settings.segmentation.validate().map_err(|e| {
            InsightsError::Config(format!(
                "Invalid segmentation in {}: {}",
                settings_path.display(),
                e
            ))
        })?;

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &InsightsPaths) -> Result<(), InsightsError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| InsightsError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| InsightsError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
