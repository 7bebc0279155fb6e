//! Enrichment sweep over the threshold grid.
//!
//! For each threshold `p` the engine takes the top `k = ceil(p/100 * N)`
//! items by true value and by predicted value, counts the overlap between
//! the two index sets, and normalizes it by the overlap expected under
//! random ranking (`k²/N`):
//!
//! ```text
//! score(p) = (overlap / k) / (k / N) = overlap * N / k²
//! ```
//!
//! Thresholds ascend, so `k` never decreases across the sweep; both top-k
//! sets only ever grow, and the overlap is maintained incrementally. After
//! the two argsorts a full sweep is O(N + samples).
//!
//! Stratified mode partitions the observations by group label, runs the
//! sweep per group against that group's own size, and averages the curves
//! across groups per threshold. Groups are independent, so the fan-out runs
//! on rayon; they are recombined in label order before averaging, keeping
//! the result independent of completion order.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::Debug;

use ndarray::ArrayView1;
use rayon::prelude::*;

use crate::error::SurfaceError;
use crate::grid::ThresholdGrid;
use crate::params::{GroupWeighting, SurfaceParams};
use crate::surface::Surface;

// =============================================================================
// Public entry points
// =============================================================================

/// Compute the enrichment surface for one pooled set of observations.
///
/// `true_values` and `predicted_values` must be non-empty and of equal
/// length; index `i` refers to the same item in both.
pub fn compute_surface(
    true_values: ArrayView1<'_, f64>,
    predicted_values: ArrayView1<'_, f64>,
    params: &SurfaceParams,
) -> Result<Surface, SurfaceError> {
    check_shapes(true_values.len(), predicted_values.len())?;
    let grid = ThresholdGrid::from_params(params)?;

    let trues: Vec<f64> = true_values.iter().copied().collect();
    let preds: Vec<f64> = predicted_values.iter().copied().collect();
    let scores = sweep(&trues, &preds, &grid);
    Ok(Surface::from_scores(grid.thresholds(), scores))
}

/// Compute one surface per group label and aggregate them into a single
/// averaged surface.
///
/// Every group's `k` is derived from that group's own size, so small strata
/// contribute at every threshold. Aggregation follows
/// [`SurfaceParams::weighting`]; the default gives every group equal weight
/// regardless of its observation count.
pub fn compute_stratified<L>(
    true_values: ArrayView1<'_, f64>,
    predicted_values: ArrayView1<'_, f64>,
    group_labels: &[L],
    params: &SurfaceParams,
) -> Result<Surface, SurfaceError>
where
    L: Ord + Debug + Sync,
{
    check_shapes(true_values.len(), predicted_values.len())?;
    if group_labels.len() != true_values.len() {
        return Err(SurfaceError::ShapeMismatch {
            what: "group labels",
            expected: true_values.len(),
            got: group_labels.len(),
        });
    }
    let grid = ThresholdGrid::from_params(params)?;

    // BTreeMap keeps the group order deterministic across calls.
    let mut groups: BTreeMap<&L, Vec<usize>> = BTreeMap::new();
    for (i, label) in group_labels.iter().enumerate() {
        groups.entry(label).or_default().push(i);
    }
    let groups: Vec<(&L, Vec<usize>)> = groups.into_iter().collect();

    let per_group: Vec<(Vec<f64>, usize)> = groups
        .par_iter()
        .map(|(label, indices)| {
            if indices.is_empty() {
                return Err(SurfaceError::EmptyGroup {
                    label: format!("{label:?}"),
                });
            }
            let trues: Vec<f64> = indices.iter().map(|&i| true_values[i]).collect();
            let preds: Vec<f64> = indices.iter().map(|&i| predicted_values[i]).collect();
            Ok((sweep(&trues, &preds, &grid), indices.len()))
        })
        .collect::<Result<_, _>>()?;

    let scores = aggregate(&per_group, grid.len(), params.weighting);
    Ok(Surface::from_scores(grid.thresholds(), scores))
}

// =============================================================================
// Sweep internals
// =============================================================================

/// Indices sorted by value descending, original index ascending.
///
/// The explicit index tie-break makes top-k selection a total order, so
/// repeated calls over data with duplicates are bit-identical.
fn rank_order(values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_unstable_by(|&a, &b| {
        values[b]
            .partial_cmp(&values[a])
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.cmp(&b))
    });
    order
}

/// One enrichment score per grid threshold, for a single stratum.
fn sweep(trues: &[f64], preds: &[f64], grid: &ThresholdGrid) -> Vec<f64> {
    let n = trues.len();
    debug_assert!(n > 0);
    debug_assert_eq!(n, preds.len());

    let order_true = rank_order(trues);
    let order_pred = rank_order(preds);

    let mut in_true = vec![false; n];
    let mut in_pred = vec![false; n];
    let mut taken = 0usize;
    let mut overlap = 0usize;

    let mut scores = Vec::with_capacity(grid.len());
    for &p in grid.thresholds() {
        let k = ThresholdGrid::top_k(p, n);

        // Grow both top-k sets up to the new k. An index is counted exactly
        // once, at the step where the later of its two memberships is set;
        // when t == q the first check still sees in_pred[t] unset, so only
        // the second check fires.
        while taken < k {
            let t = order_true[taken];
            in_true[t] = true;
            if in_pred[t] {
                overlap += 1;
            }
            let q = order_pred[taken];
            in_pred[q] = true;
            if in_true[q] {
                overlap += 1;
            }
            taken += 1;
        }

        scores.push(overlap as f64 * n as f64 / (k * k) as f64);
    }
    scores
}

fn aggregate(
    per_group: &[(Vec<f64>, usize)],
    n_thresholds: usize,
    weighting: GroupWeighting,
) -> Vec<f64> {
    let mut scores = vec![0.0f64; n_thresholds];
    let mut total_weight = 0.0f64;
    for (group_scores, size) in per_group {
        let w = match weighting {
            GroupWeighting::Equal => 1.0,
            GroupWeighting::BySize => *size as f64,
        };
        for (acc, &s) in scores.iter_mut().zip(group_scores) {
            *acc += w * s;
        }
        total_weight += w;
    }
    for s in &mut scores {
        *s /= total_weight;
    }
    scores
}

fn check_shapes(n_true: usize, n_pred: usize) -> Result<(), SurfaceError> {
    if n_pred != n_true {
        return Err(SurfaceError::ShapeMismatch {
            what: "predicted values",
            expected: n_true,
            got: n_pred,
        });
    }
    if n_true == 0 {
        return Err(SurfaceError::EmptyInput);
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
