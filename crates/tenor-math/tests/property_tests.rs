//! Property-based tests for the root finders.

use proptest::prelude::*;
use tenor_math::solvers::{bisection, expand_upper_bound, SolverConfig};

proptest! {
    #[test]
    fn bracket_upper_bound_reaches_root(root in 0.01f64..1.0e6) {
        let f = |x: f64| root - x;
        let bracket = expand_upper_bound(f, 0.0, 1.0, &SolverConfig::default()).unwrap();

        prop_assert!(bracket.upper >= root);
        prop_assert!(bracket.upper == 1.0 || bracket.upper / 2.0 < root);
    }

    #[test]
    fn bisection_finds_linear_root(root in 0.001f64..0.999, slope in 1.0f64..500.0) {
        let f = |x: f64| slope * (root - x);
        let config = SolverConfig::default();

        let result = bisection(f, 0.0, 1.0, &config).unwrap();

        prop_assert!(result.converged);
        prop_assert!(result.residual.abs() < config.tolerance);
        prop_assert!(result.iterations <= config.max_iterations);
    }

    #[test]
    fn bisection_stays_inside_bracket(max_iterations in 1u32..40) {
        let f = |x: f64| (-x).exp() - 0.5;
        let config = SolverConfig::new(1e-300, max_iterations);

        let result = bisection(f, 0.0, 4.0, &config).unwrap();

        prop_assert!(result.root > 0.0 && result.root < 4.0);
        prop_assert_eq!(result.iterations, max_iterations);
    }
}
