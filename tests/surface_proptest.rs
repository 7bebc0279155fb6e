//! Property-based tests for the enrichment sweep.
//!
//! These generate arbitrary observation sets and verify the structural
//! invariants that must hold for every valid input.

use ndarray::aview1;
use proptest::collection::vec as prop_vec;
use proptest::prelude::*;

use resurf::{compute_stratified, compute_surface, SurfaceParams};

/// Strategy for finite observation values (no NaN/Inf).
fn arb_finite_f64() -> impl Strategy<Value = f64> {
    prop::num::f64::ANY
        .prop_filter("must be finite", |x| x.is_finite())
        .prop_map(|x| x.clamp(-1e12, 1e12))
}

fn arb_observations() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (1usize..200).prop_flat_map(|n| {
        (
            prop_vec(arb_finite_f64(), n),
            prop_vec(arb_finite_f64(), n),
        )
    })
}

proptest! {
    #[test]
    fn surface_shape_holds_for_any_input(
        (trues, preds) in arb_observations(),
        samples in 2usize..40,
    ) {
        let params = SurfaceParams::builder().samples(samples).build();
        let surface = compute_surface(aview1(&trues), aview1(&preds), &params).unwrap();

        prop_assert_eq!(surface.len(), samples);
        let thresholds: Vec<f64> = surface.thresholds().collect();
        prop_assert!(thresholds.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(thresholds[0] > 0.0);
        prop_assert!(thresholds[samples - 1] <= 100.0 + 1e-9);

        // Score bounds: non-negative, and never above the ceiling N/k >= 1.
        let n = trues.len() as f64;
        for point in surface.points() {
            prop_assert!(point.score >= 0.0);
            prop_assert!(point.score <= n + 1e-9);
        }
        // The 100% threshold always selects everything.
        let last = surface.points().last().unwrap();
        prop_assert!((last.score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn compute_is_deterministic(
        (trues, preds) in arb_observations(),
    ) {
        let params = SurfaceParams::builder().samples(16).build();
        let a = compute_surface(aview1(&trues), aview1(&preds), &params).unwrap();
        let b = compute_surface(aview1(&trues), aview1(&preds), &params).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn stratified_is_deterministic_and_well_shaped(
        (trues, preds) in arb_observations(),
        n_groups in 1usize..6,
    ) {
        let labels: Vec<usize> = (0..trues.len()).map(|i| i % n_groups).collect();
        let params = SurfaceParams::builder().samples(12).build();

        let a = compute_stratified(aview1(&trues), aview1(&preds), &labels, &params).unwrap();
        let b = compute_stratified(aview1(&trues), aview1(&preds), &labels, &params).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.len(), 12);
        prop_assert!(a.scores().all(|s| s >= 0.0));
    }

    #[test]
    fn monotone_transform_of_predictions_leaves_surface_unchanged(
        (trues, preds) in arb_observations(),
    ) {
        // Scores depend only on the predicted ranking, not its scale.
        // Scaling by a power of two is exact, so no new ties can appear.
        let params = SurfaceParams::builder().samples(10).build();
        let scaled: Vec<f64> = preds.iter().map(|&p| p * 4.0).collect();

        let original = compute_surface(aview1(&trues), aview1(&preds), &params).unwrap();
        let transformed = compute_surface(aview1(&trues), aview1(&scaled), &params).unwrap();
        prop_assert_eq!(original, transformed);
    }
}
