//! Aggregate statistics over the fetched collections.
//!
//! Every function here is pure and cheap; callers recompute on each render
//! instead of caching. Absent numeric fields contribute zero.

use serde::Serialize;

use crate::types::{Harvest, Investment};

/// Sum of `weight_kg` across all harvests.
pub fn total_weight(harvests: &[Harvest]) -> f64 {
    harvests.iter().map(|h| h.weight_kg.unwrap_or(0.0)).sum()
}

/// Arithmetic mean of `price_per_kg`, not weighted by volume.
///
/// Returns 0 for an empty collection.
pub fn average_price(harvests: &[Harvest]) -> f64 {
    if harvests.is_empty() {
        return 0.0;
    }
    let total: f64 = harvests.iter().map(|h| h.price_per_kg.unwrap_or(0.0)).sum();
    total / harvests.len() as f64
}

/// Sum of `weight_kg * price_per_kg` per harvest.
pub fn estimated_revenue(harvests: &[Harvest]) -> f64 {
    harvests.iter().map(Harvest::revenue).sum()
}

/// Sum of `amount_usd` across all investments.
pub fn total_invested(investments: &[Investment]) -> f64 {
    investments.iter().map(|i| i.amount_usd.unwrap_or(0.0)).sum()
}

/// The four dashboard figures computed together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Summary {
    /// Total catch in kilograms
    pub total_weight_kg: f64,
    /// Mean dock price per kilogram
    pub average_price_per_kg: f64,
    /// Estimated revenue in USD
    pub estimated_revenue: f64,
    /// Total invested in USD
    pub total_invested: f64,
}

impl Summary {
    /// Computes all figures from the current snapshot.
    pub fn compute(harvests: &[Harvest], investments: &[Investment]) -> Self {
        Self {
            total_weight_kg: total_weight(harvests),
            average_price_per_kg: average_price(harvests),
            estimated_revenue: estimated_revenue(harvests),
            total_invested: total_invested(investments),
        }
    }

    /// Labelled, display-formatted tiles in dashboard order.
    pub fn tiles(&self) -> [StatTile; 4] {
        [
            StatTile::new("Total Catch", format!("{:.1} kg", self.total_weight_kg)),
            StatTile::new(
                "Avg Dock Price",
                format!("${:.2}/kg", self.average_price_per_kg),
            ),
            StatTile::new("Est. Revenue", format!("${:.0}", self.estimated_revenue)),
            StatTile::new("Total Invested", format!("${:.0}", self.total_invested)),
        ]
    }
}

/// A labelled statistic ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatTile {
    /// Caption shown above the value
    pub label: &'static str,
    /// Formatted value
    pub value: String,
}

impl StatTile {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::RecordId;
    use proptest::prelude::*;

    fn harvest(weight: f64, price: f64) -> Harvest {
        Harvest {
            id: RecordId::new("h"),
            harvest_date: None,
            boat: "Sea Urchin".to_string(),
            location: "Stonington".to_string(),
            weight_kg: Some(weight),
            price_per_kg: Some(price),
            notes: None,
        }
    }

    fn investment(amount: f64) -> Investment {
        Investment {
            id: RecordId::new("i"),
            investor_name: "Ada Pike".to_string(),
            amount_usd: Some(amount),
            investment_date: None,
            instrument: "revenue share".to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_empty_collections_are_zero() {
        assert_eq!(total_weight(&[]), 0.0);
        assert_eq!(average_price(&[]), 0.0);
        assert_eq!(estimated_revenue(&[]), 0.0);
        assert_eq!(total_invested(&[]), 0.0);
        assert_eq!(Summary::compute(&[], &[]), Summary::default());
    }

    #[test]
    fn test_estimated_revenue_example() {
        let harvests = vec![harvest(10.0, 5.0), harvest(4.0, 2.5)];
        assert_eq!(estimated_revenue(&harvests), 60.0);
    }

    #[test]
    fn test_total_invested_example() {
        let investments = vec![investment(1000.0), investment(250.5)];
        assert_eq!(total_invested(&investments), 1250.5);
    }

    #[test]
    fn test_average_price_is_unweighted() {
        let harvests = vec![harvest(100.0, 10.0), harvest(1.0, 20.0)];
        assert_eq!(average_price(&harvests), 15.0);
    }

    #[test]
    fn test_absent_fields_count_as_zero() {
        let mut partial = harvest(8.0, 3.0);
        partial.price_per_kg = None;
        let harvests = vec![partial, harvest(2.0, 4.0)];

        assert_eq!(total_weight(&harvests), 10.0);
        assert_eq!(average_price(&harvests), 2.0);
        assert_eq!(estimated_revenue(&harvests), 8.0);
    }

    #[test]
    fn test_zero_price_contributes_nothing() {
        let harvests = vec![harvest(10.0, 0.0), harvest(4.0, 2.5)];
        assert_eq!(estimated_revenue(&harvests), 10.0);
    }

    #[test]
    fn test_tiles_formatting() {
        let harvests = vec![harvest(10.0, 5.0), harvest(4.0, 2.5)];
        let investments = vec![investment(1000.0), investment(250.5)];
        let tiles = Summary::compute(&harvests, &investments).tiles();

        assert_eq!(tiles[0], StatTile::new("Total Catch", "14.0 kg".to_string()));
        assert_eq!(tiles[1].value, "$3.75/kg");
        assert_eq!(tiles[2].value, "$60");
        assert_eq!(tiles[3].label, "Total Invested");
        assert!(tiles[3].value.starts_with("$125"));
    }

    proptest! {
        #[test]
        fn prop_total_weight_is_exact_sum(weights in prop::collection::vec(0.0f64..10_000.0, 0..32)) {
            let harvests: Vec<Harvest> = weights.iter().map(|w| harvest(*w, 1.0)).collect();
            let expected: f64 = weights.iter().sum();
            prop_assert_eq!(total_weight(&harvests), expected);
        }

        #[test]
        fn prop_average_price_within_bounds(prices in prop::collection::vec(0.0f64..500.0, 1..32)) {
            let harvests: Vec<Harvest> = prices.iter().map(|p| harvest(1.0, *p)).collect();
            let avg = average_price(&harvests);
            let min = prices.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = prices.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(avg >= min - 1e-9 && avg <= max + 1e-9);
        }

        #[test]
        fn prop_revenue_matches_per_record_products(
            pairs in prop::collection::vec((0.0f64..1_000.0, 0.0f64..100.0), 0..32)
        ) {
            let harvests: Vec<Harvest> = pairs.iter().map(|(w, p)| harvest(*w, *p)).collect();
            let expected: f64 = pairs.iter().map(|(w, p)| w * p).sum();
            prop_assert_eq!(estimated_revenue(&harvests), expected);
        }
    }
}
