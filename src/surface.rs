//! The computed enrichment surface.

/// One point of the surface: a percentile threshold and the enrichment score
/// observed at it.
///
/// The score is the observed top-k overlap between predicted and true
/// rankings divided by the overlap expected under random ranking. 1.0 means
/// chance-level agreement at that tier; the maximum is `N/k`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnrichmentPoint {
    /// Threshold in percent, in `(0, 100]`.
    pub threshold: f64,
    /// Non-negative enrichment score.
    pub score: f64,
}

/// An ordered threshold-vs-score curve produced by one compute call.
///
/// Points are ordered by strictly increasing threshold; scores need not be
/// monotonic. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    points: Vec<EnrichmentPoint>,
}

impl Surface {
    pub(crate) fn from_scores(thresholds: &[f64], scores: Vec<f64>) -> Self {
        debug_assert_eq!(thresholds.len(), scores.len());
        let points = thresholds
            .iter()
            .zip(scores)
            .map(|(&threshold, score)| EnrichmentPoint { threshold, score })
            .collect();
        Self { points }
    }

    /// All points, ordered by ascending threshold.
    pub fn points(&self) -> &[EnrichmentPoint] {
        &self.points
    }

    /// Thresholds in percent, ascending.
    pub fn thresholds(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.threshold)
    }

    /// Scores in threshold order.
    pub fn scores(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.score)
    }

    /// Number of points (equals the grid's `samples`).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Area under the curve over log10(threshold), normalized by the log-span
    /// of the grid. A scalar summary of the whole sweep: higher means
    /// stronger enrichment across tiers.
    pub fn log_auc(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        let xs: Vec<f64> = self.points.iter().map(|p| p.threshold.log10()).collect();
        let span = xs[xs.len() - 1] - xs[0];
        if span <= 0.0 {
            return 0.0;
        }
        let area: f64 = self
            .points
            .windows(2)
            .zip(xs.windows(2))
            .map(|(p, x)| 0.5 * (p[0].score + p[1].score) * (x[1] - x[0]))
            .sum();
        area / span
    }
}

// =============================================================================
// Tests
// =============================================================================
