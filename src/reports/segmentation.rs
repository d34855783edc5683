//! Rule-based customer segmentation over RFM values
//!
//! Each RFM value is bucketed into an ordinal band by a `BinScheme`, the
//! three band labels are concatenated into a segment code (`R4F2M4`), and the
//! code is looked up in the configured rules. Bands are right-closed
//! intervals `(edge[i], edge[i + 1]]`, so a value equal to the lowest edge
//! falls outside every band: a customer whose last purchase is the latest in
//! the set has recency 0 and no recency band. A value outside every band
//! contributes `NA` to the code, which no default rule matches.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::rfm::RfmRecord;
use crate::error::{InsightsError, InsightsResult};

/// Placeholder band label for values outside every band
pub const MISSING_BAND: &str = "NA";

/// Ordered bin edges and the label of each band between them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinScheme {
    pub edges: Vec<f64>,
    pub labels: Vec<String>,
}

impl BinScheme {
    pub fn new(edges: &[f64], labels: &[&str]) -> Self {
        Self {
            edges: edges.to_vec(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// Label of the band containing `value`
    pub fn band(&self, value: f64) -> Option<&str> {
        if self.edges.len() < 2 || value.is_nan() {
            return None;
        }
        self.edges
            .windows(2)
            .zip(&self.labels)
            .find(|(bounds, _)| value > bounds[0] && value <= bounds[1])
            .map(|(_, label)| label.as_str())
    }

    /// Check edges are strictly increasing and each band has one label
    pub fn validate(&self, name: &str) -> InsightsResult<()> {
        if self.edges.len() < 2 {
            return Err(InsightsError::Validation(format!(
                "{} bins need at least two edges",
                name
            )));
        }
        if self.edges.iter().any(|e| !e.is_finite()) {
            return Err(InsightsError::Validation(format!(
                "{} bin edges must be finite numbers",
                name
            )));
        }
        if self.edges.windows(2).any(|w| w[0] >= w[1]) {
            return Err(InsightsError::Validation(format!(
                "{} bin edges must be strictly increasing",
                name
            )));
        }
        if self.labels.len() != self.edges.len() - 1 {
            return Err(InsightsError::Validation(format!(
                "{} bins have {} edges but {} labels (expected {})",
                name,
                self.edges.len(),
                self.labels.len(),
                self.edges.len() - 1
            )));
        }
        Ok(())
    }
}

/// Named customer segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerSegment {
    Champion,
    Loyal,
    AtRisk,
    Lost,
}

impl CustomerSegment {
    pub const ALL: [CustomerSegment; 4] = [
        CustomerSegment::Champion,
        CustomerSegment::Loyal,
        CustomerSegment::AtRisk,
        CustomerSegment::Lost,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Champion => "Champion Customers",
            Self::Loyal => "Loyal Customers",
            Self::AtRisk => "At Risk Customers",
            Self::Lost => "Lost Customers",
        }
    }
}

impl fmt::Display for CustomerSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps one exact segment code to a named segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentRule {
    pub code: String,
    pub segment: CustomerSegment,
}

impl SegmentRule {
    pub fn new(code: &str, segment: CustomerSegment) -> Self {
        Self {
            code: code.to_string(),
            segment,
        }
    }
}

/// Bin edges, band labels and naming rules for segmentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentationConfig {
    /// Days since last purchase; lower is better, so labels run R4 to R1
    pub recency: BinScheme,
    /// Order lines per customer
    pub frequency: BinScheme,
    /// Revenue per customer, in currency units
    pub monetary: BinScheme,
    pub rules: Vec<SegmentRule>,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            recency: BinScheme::new(&[0.0, 119.0, 224.0, 354.0, 730.0], &["R4", "R3", "R2", "R1"]),
            frequency: BinScheme::new(&[0.0, 1.0, 22.0], &["F1", "F2"]),
            monetary: BinScheme::new(
                &[0.0, 48.0, 90.0, 160.0, 60480.0],
                &["M1", "M2", "M3", "M4"],
            ),
            rules: vec![
                SegmentRule::new("R4F2M4", CustomerSegment::Champion),
                SegmentRule::new("R3F2M4", CustomerSegment::Loyal),
                SegmentRule::new("R2F1M2", CustomerSegment::AtRisk),
                SegmentRule::new("R1F1M1", CustomerSegment::Lost),
            ],
        }
    }
}

impl SegmentationConfig {
    pub fn validate(&self) -> InsightsResult<()> {
        self.recency.validate("recency")?;
        self.frequency.validate("frequency")?;
        self.monetary.validate("monetary")?;

        let mut seen = HashSet::new();
        for rule in &self.rules {
            if !seen.insert(rule.code.as_str()) {
                return Err(InsightsError::Validation(format!(
                    "segment code {} has more than one rule",
                    rule.code
                )));
            }
        }
        Ok(())
    }
}

/// A customer's RFM values with their bands, code and segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentedCustomer {
    #[serde(flatten)]
    pub rfm: RfmRecord,
    pub recency_band: Option<String>,
    pub frequency_band: Option<String>,
    pub monetary_band: Option<String>,
    /// Concatenated band labels, e.g. `R4F2M4`
    pub code: String,
    /// Named segment, or None when no rule matches the code
    pub segment: Option<CustomerSegment>,
}

/// Band, code and name every customer
///
/// Pure: the same input and config always produce the same codes.
pub fn segment_customers(
    rfm: &[RfmRecord],
    config: &SegmentationConfig,
) -> Vec<SegmentedCustomer> {
    let rules: HashMap<&str, CustomerSegment> = config
        .rules
        .iter()
        .map(|r| (r.code.as_str(), r.segment))
        .collect();

    rfm.iter()
        .map(|record| {
            let recency_band = config.recency.band(record.recency as f64).map(str::to_string);
            let frequency_band = config
                .frequency
                .band(f64::from(record.frequency))
                .map(str::to_string);
            let monetary_band = config
                .monetary
                .band(record.monetary.as_units())
                .map(str::to_string);

            let code = [&recency_band, &frequency_band, &monetary_band]
                .iter()
                .map(|band| band.as_deref().unwrap_or(MISSING_BAND))
                .collect::<String>();
            let segment = rules.get(code.as_str()).copied();

            SegmentedCustomer {
                rfm: record.clone(),
                recency_band,
                frequency_band,
                monetary_band,
                code,
                segment,
            }
        })
        .collect()
}

/// Customers in one named segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentCount {
    pub segment: CustomerSegment,
    pub customers: usize,
}

/// Customers per named segment, largest first; unnamed codes are dropped
pub fn count_segments(segmented: &[SegmentedCustomer]) -> Vec<SegmentCount> {
    let mut counts: HashMap<CustomerSegment, usize> = HashMap::new();
    for customer in segmented {
        if let Some(segment) = customer.segment {
            *counts.entry(segment).or_default() += 1;
        }
    }

    super::ranking::rank_descending(counts)
        .into_iter()
        .map(|(segment, customers)| SegmentCount { segment, customers })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CustomerId, Money};

    fn rfm(id: &str, recency: i64, frequency: u32, cents: i64) -> RfmRecord {
        RfmRecord {
            customer_id: CustomerId::from(id),
            recency,
            frequency,
            monetary: Money::from_cents(cents),
        }
    }

    #[test]
    fn test_band_edges_are_right_closed() {
        let config = SegmentationConfig::default();
        assert_eq!(config.recency.band(0.0), None);
        assert_eq!(config.recency.band(0.5), Some("R4"));
        assert_eq!(config.recency.band(119.0), Some("R4"));
        assert_eq!(config.recency.band(120.0), Some("R3"));
        assert_eq!(config.recency.band(354.0), Some("R2"));
        assert_eq!(config.recency.band(730.0), Some("R1"));
        assert_eq!(config.recency.band(731.0), None);

        assert_eq!(config.frequency.band(0.0), None);
        assert_eq!(config.frequency.band(1.0), Some("F1"));
        assert_eq!(config.frequency.band(2.0), Some("F2"));
        assert_eq!(config.frequency.band(23.0), None);

        assert_eq!(config.monetary.band(0.0), None);
        assert_eq!(config.monetary.band(0.01), Some("M1"));
        assert_eq!(config.monetary.band(48.0), Some("M1"));
        assert_eq!(config.monetary.band(48.01), Some("M2"));
        assert_eq!(config.monetary.band(160.01), Some("M4"));
        assert_eq!(config.monetary.band(-1.0), None);
    }

    #[test]
    fn test_default_rules_name_four_codes() {
        let config = SegmentationConfig::default();
        let customers = vec![
            rfm("champion", 10, 3, 50_000),
            rfm("loyal", 200, 2, 20_000),
            rfm("at-risk", 300, 1, 6_000),
            rfm("lost", 500, 1, 1_000),
            rfm("other", 10, 1, 1_000),
        ];

        let segmented = segment_customers(&customers, &config);
        let pairs: Vec<(&str, Option<CustomerSegment>)> = segmented
            .iter()
            .map(|s| (s.code.as_str(), s.segment))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("R4F2M4", Some(CustomerSegment::Champion)),
                ("R3F2M4", Some(CustomerSegment::Loyal)),
                ("R2F1M2", Some(CustomerSegment::AtRisk)),
                ("R1F1M1", Some(CustomerSegment::Lost)),
                ("R4F1M1", None),
            ]
        );
    }

    #[test]
    fn test_out_of_range_value_gets_placeholder_band() {
        let config = SegmentationConfig::default();
        let segmented = segment_customers(&[rfm("old", 900, 1, 1_000)], &config);
        assert_eq!(segmented[0].recency_band, None);
        assert_eq!(segmented[0].code, "NAF1M1");
        assert_eq!(segmented[0].segment, None);
    }

    #[test]
    fn test_latest_buyer_has_no_recency_band() {
        let config = SegmentationConfig::default();
        let segmented = segment_customers(
            &[rfm("latest", 0, 3, 50_000), rfm("free", 10, 2, 0)],
            &config,
        );

        assert_eq!(segmented[0].recency_band, None);
        assert_eq!(segmented[0].code, "NAF2M4");
        assert_eq!(segmented[0].segment, None);

        assert_eq!(segmented[1].monetary_band, None);
        assert_eq!(segmented[1].code, "R4F2NA");
        assert!(count_segments(&segmented).is_empty());
    }

    #[test]
    fn test_only_named_codes_are_counted() {
        let config = SegmentationConfig::default();
        let customers = vec![
            rfm("a", 10, 3, 50_000),
            rfm("b", 20, 5, 90_000),
            rfm("c", 500, 1, 1_000),
            rfm("d", 10, 1, 1_000),
            rfm("e", 900, 1, 1_000),
        ];

        let counts = count_segments(&segment_customers(&customers, &config));
        assert_eq!(
            counts,
            vec![
                SegmentCount { segment: CustomerSegment::Champion, customers: 2 },
                SegmentCount { segment: CustomerSegment::Lost, customers: 1 },
            ]
        );
        let named: usize = counts.iter().map(|c| c.customers).sum();
        assert_eq!(named, 3);
    }

    #[test]
    fn test_segmentation_is_idempotent() {
        let config = SegmentationConfig::default();
        let customers = vec![rfm("a", 10, 3, 50_000), rfm("b", 300, 1, 6_000)];

        let first: Vec<String> = segment_customers(&customers, &config)
            .into_iter()
            .map(|s| s.code)
            .collect();
        let second: Vec<String> = segment_customers(&customers, &config)
            .into_iter()
            .map(|s| s.code)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_thresholds_change_codes() {
        let mut config = SegmentationConfig::default();
        config.frequency = BinScheme::new(&[0.0, 2.0, 22.0], &["F1", "F2"]);

        let segmented = segment_customers(&[rfm("a", 10, 2, 50_000)], &config);
        assert_eq!(segmented[0].code, "R4F1M4");
        assert_eq!(segmented[0].segment, None);
    }

    #[test]
    fn test_validate_rejects_bad_schemes() {
        let mut config = SegmentationConfig::default();
        assert!(config.validate().is_ok());

        config.monetary = BinScheme::new(&[0.0, 90.0, 48.0], &["M1", "M2"]);
        assert!(config.validate().unwrap_err().is_validation());

        let mut config = SegmentationConfig::default();
        config.recency = BinScheme::new(&[0.0, 119.0, 224.0], &["R4"]);
        assert!(config.validate().is_err());

        let mut config = SegmentationConfig::default();
        config.rules.push(SegmentRule::new("R4F2M4", CustomerSegment::Loyal));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = SegmentationConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"at_risk\""));
        let restored: SegmentationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }
}
