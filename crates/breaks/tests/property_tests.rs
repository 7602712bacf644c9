#![cfg(feature = "dev")]
//! Property-based tests for the classification methods.
//!
//! Inputs are drawn from small integer ranges so that duplicates and
//! tables with fewer distinct values than classes occur often.

use proptest::prelude::*;

use breaks::internals::algorithms::jenks::{LocalSearch, SearchStep};
use breaks::internals::api::{BreaksBuilder, Method, equal_interval, head_tail, jenks, quantile};
use breaks::internals::math::statistics::sdam;
use breaks::internals::primitives::frequency::FrequencyTable;
use breaks::internals::primitives::partition::ClassPartition;

fn observations() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-40_i32..60, 1..80).prop_map(|v| v.into_iter().map(f64::from).collect())
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    sorted
}

proptest! {
    /// Equal interval yields k non-decreasing boundaries ending at the maximum.
    #[test]
    fn prop_equal_interval_shape(values in observations(), k in 1_usize..10) {
        let sorted = sorted_copy(&values);
        let breaks = equal_interval(&values, k).unwrap();

        prop_assert_eq!(breaks.len(), k);
        prop_assert!(breaks.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(*breaks.last().unwrap(), *sorted.last().unwrap());
    }

    /// Quantile boundaries are observed values, non-decreasing, ending at the maximum.
    #[test]
    fn prop_quantile_shape(values in observations(), k in 1_usize..10) {
        let sorted = sorted_copy(&values);
        let breaks = quantile(&values, k).unwrap();

        prop_assert_eq!(breaks.len(), k);
        prop_assert!(breaks.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(breaks.iter().all(|b| sorted.contains(b)));
        prop_assert_eq!(*breaks.last().unwrap(), *sorted.last().unwrap());
    }

    /// Head/tail yields at most k strictly increasing boundaries.
    #[test]
    fn prop_head_tail_shape(values in observations(), k in 1_usize..10) {
        let breaks = head_tail(&values, k).unwrap();

        prop_assert!(breaks.len() <= k.max(values.len()));
        if values.len() >= k {
            prop_assert!(breaks.len() <= k);
            prop_assert!(breaks.windows(2).all(|w| w[0] < w[1]));
        }
    }

    /// Jenks boundaries are distinct observed values and cover every class.
    #[test]
    fn prop_jenks_boundaries(values in observations(), k in 1_usize..8, invert in any::<bool>()) {
        let table = FrequencyTable::from_values(&values);
        let result = jenks(&values, k, 3, invert).unwrap();

        prop_assert_eq!(result.class_count(), k.min(table.len()));
        prop_assert!(result.boundaries.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(result.boundaries.iter().all(|b| table.values().contains(b)));

        let fit = result.fit_score.unwrap();
        prop_assert!(fit <= sdam(&table) + 1e-9);
    }

    /// Jenks with the same seed is reproducible, and restarts never lower the fit.
    #[test]
    fn prop_jenks_restarts(values in observations(), k in 2_usize..6, seed in any::<u64>()) {
        let build = |iterations: usize| {
            BreaksBuilder::<f64>::new()
                .classes(k)
                .method(Method::Jenks)
                .iterations(iterations)
                .seed(seed)
                .build()
                .unwrap()
        };

        let single = build(1).classify(&values).unwrap();
        let multi = build(6).classify(&values).unwrap();
        let again = build(6).classify(&values).unwrap();

        prop_assert_eq!(&multi, &again);
        prop_assert!(multi.fit_score.unwrap() >= single.fit_score.unwrap());
    }

    /// Every partition seen during local search covers the table, and accepted fits never drop.
    #[test]
    fn prop_local_search_invariants(values in observations(), k in 1_usize..8) {
        let table = FrequencyTable::from_values(&values);
        prop_assume!(table.len() > k);

        let n = table.len();
        let mut covered = true;
        let mut accepted = Vec::new();
        LocalSearch::default().run_observed(&table, ClassPartition::equal_count(n, k), sdam(&table), |step| {
            match step {
                SearchStep::Accepted { partition, gvf } => {
                    covered &= partition.covers(n) && partition.len() == k;
                    accepted.push(gvf);
                }
                SearchStep::Probed { partition } => {
                    covered &= partition.covers(n) && partition.len() == k;
                }
            }
        });

        prop_assert!(covered);
        prop_assert!(accepted.windows(2).all(|w| w[0] <= w[1]));
    }
}
