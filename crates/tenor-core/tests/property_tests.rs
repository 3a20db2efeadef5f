//! Property-based tests for schedule validation and discounting.

use proptest::prelude::*;
use tenor_core::prelude::*;

/// Strictly increasing positive times built from positive gaps.
fn increasing_times(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.05f64..2.0, 1..max_len).prop_map(|gaps| {
        gaps.iter()
            .scan(0.0, |acc, gap| {
                *acc += gap;
                Some(*acc)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn sorted_positive_times_are_accepted(times in increasing_times(20)) {
        let amounts = vec![5.0; times.len()];
        let schedule = CashFlowSchedule::new(times.clone(), amounts).unwrap();
        prop_assert_eq!(schedule.times(), times);
    }

    #[test]
    fn reversed_times_are_rejected(times in increasing_times(20)) {
        prop_assume!(times.len() > 1);
        let reversed: Vec<f64> = times.iter().rev().copied().collect();
        let amounts = vec![5.0; reversed.len()];
        prop_assert!(CashFlowSchedule::new(reversed, amounts).is_err());
    }

    #[test]
    fn discount_factor_in_unit_interval_for_positive_rates(
        rate in 0.0001f64..1.0,
        time in 0.01f64..50.0,
    ) {
        for compounding in [Compounding::Discrete, Compounding::Continuous] {
            let df = compounding.discount_factor(rate, time).unwrap();
            prop_assert!(df > 0.0 && df < 1.0);
        }
    }

    #[test]
    fn discount_factor_decreases_with_time(
        rate in 0.0001f64..0.5,
        t1 in 0.01f64..30.0,
        gap in 0.01f64..10.0,
    ) {
        for compounding in [Compounding::Discrete, Compounding::Continuous] {
            let near = compounding.discount_factor(rate, t1).unwrap();
            let far = compounding.discount_factor(rate, t1 + gap).unwrap();
            prop_assert!(far < near);
        }
    }

    #[test]
    fn continuous_discounts_harder_than_discrete(
        rate in 0.0001f64..0.5,
        time in 0.1f64..30.0,
    ) {
        let discrete = Compounding::Discrete.discount_factor(rate, time).unwrap();
        let continuous = Compounding::Continuous.discount_factor(rate, time).unwrap();
        prop_assert!(continuous < discrete);
    }
}
