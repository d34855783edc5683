//! Customer demographics
//!
//! Distinct customer counts per city and per state.

use serde::{Deserialize, Serialize};

use super::ranking::distinct_per_key;
use crate::models::TransactionRow;

/// Distinct customers for one city or state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCount {
    /// City or state name
    pub key: String,
    /// Number of distinct customers
    pub customers: usize,
}

fn to_counts(ranked: Vec<(String, usize)>) -> Vec<CustomerCount> {
    ranked
        .into_iter()
        .map(|(key, customers)| CustomerCount { key, customers })
        .collect()
}

/// Distinct customers per city, most customers first
pub fn group_by_city_customer_count(rows: &[TransactionRow]) -> Vec<CustomerCount> {
    to_counts(distinct_per_key(
        rows,
        |r| r.customer_city.as_str(),
        |r| &r.customer_id,
    ))
}

/// Distinct customers per state, most customers first
pub fn group_by_state_customer_count(rows: &[TransactionRow]) -> Vec<CustomerCount> {
    to_counts(distinct_per_key(
        rows,
        |r| r.customer_state.as_str(),
        |r| &r.customer_id,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transaction::fixtures::row;

    fn located(customer: &str, city: &str, state: &str) -> TransactionRow {
        let mut r = row(customer, &format!("o-{customer}"), "2018-01-01", 100);
        r.customer_city = city.to_string();
        r.customer_state = state.to_string();
        r
    }

    #[test]
    fn test_city_counts_distinct_customers() {
        let rows = vec![
            located("c1", "sao paulo", "SP"),
            located("c1", "sao paulo", "SP"),
            located("c2", "sao paulo", "SP"),
            located("c3", "rio de janeiro", "RJ"),
        ];

        let counts = group_by_city_customer_count(&rows);
        assert_eq!(
            counts,
            vec![
                CustomerCount { key: "sao paulo".into(), customers: 2 },
                CustomerCount { key: "rio de janeiro".into(), customers: 1 },
            ]
        );
    }

    #[test]
    fn test_state_counts_are_descending() {
        let rows = vec![
            located("c1", "campinas", "SP"),
            located("c2", "niteroi", "RJ"),
            located("c3", "santos", "SP"),
            located("c4", "belo horizonte", "MG"),
            located("c5", "sao paulo", "SP"),
            located("c6", "rio de janeiro", "RJ"),
        ];

        let counts = group_by_state_customer_count(&rows);
        assert_eq!(counts[0].key, "SP");
        assert!(counts.windows(2).all(|w| w[0].customers >= w[1].customers));
        let total: usize = counts.iter().map(|c| c.customers).sum();
        assert_eq!(total, 6);
    }

    #[test]
    fn test_empty_input_yields_empty_table() {
        assert!(group_by_city_customer_count(&[]).is_empty());
        assert!(group_by_state_customer_count(&[]).is_empty());
    }
}
