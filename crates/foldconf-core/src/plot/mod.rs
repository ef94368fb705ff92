//! Optional two-panel confidence chart.
//!
//! Rendering goes through the [`ChartRenderer`] trait so a run can proceed without a plotting
//! backend. With the `plot` feature, [`PngChart`] draws the chart with `plotters`; otherwise
//! [`default_renderer`] hands out a [`DisabledChart`] that reports itself as unavailable.

#[cfg(feature = "plot")]
mod png;

#[cfg(feature = "plot")]
pub use png::PngChart;

use crate::engine::analysis::Analysis;
use std::path::Path;
use thiserror::Error;

/// Number of histogram bins spanning the [0, 100] score axis.
pub const HISTOGRAM_BINS: usize = 50;

#[derive(Debug, Clone, Error)]
pub enum ChartError {
    #[error("Plotting backend unavailable: {0}")]
    Unavailable(&'static str),
    #[error("Failed to render chart '{path}': {message}")]
    Render { path: String, message: String },
}

pub trait ChartRenderer {
    fn render(&self, analysis: &Analysis, path: &Path) -> Result<(), ChartError>;
}

/// Stand-in used when no plotting backend is compiled in or charts are switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledChart;

impl ChartRenderer for DisabledChart {
    fn render(&self, _analysis: &Analysis, _path: &Path) -> Result<(), ChartError> {
        Err(ChartError::Unavailable("chart rendering is disabled"))
    }
}

/// The best renderer available in this build.
pub fn default_renderer() -> Box<dyn ChartRenderer> {
    #[cfg(feature = "plot")]
    {
        Box::new(PngChart::default())
    }
    #[cfg(not(feature = "plot"))]
    {
        Box::new(DisabledChart)
    }
}

/// Counts scores into `bins` equal-width bins over `[min, max]`; the top edge falls in the last bin.
pub fn histogram_counts(values: &[f64], min: f64, max: f64, bins: usize) -> Vec<(f64, usize)> {
    if bins == 0 || max <= min {
        return Vec::new();
    }
    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &value in values {
        if value < min || value > max {
            continue;
        }
        let idx = (((value - min) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }
    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| (min + i as f64 * width, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::metrics::GlobalMetrics;
    use crate::core::models::region::RegionLayout;
    use crate::core::models::residue::ResidueRecord;

    #[test]
    fn histogram_counts_every_value_once() {
        let values = [0.0, 1.9, 2.0, 50.0, 99.0, 100.0];
        let counts = histogram_counts(&values, 0.0, 100.0, HISTOGRAM_BINS);
        assert_eq!(counts.len(), 50);
        assert_eq!(counts.iter().map(|(_, c)| c).sum::<usize>(), values.len());
        assert_eq!(counts[0], (0.0, 2));
        assert_eq!(counts[1].1, 1);
        assert_eq!(counts[25].1, 1);
        assert_eq!(counts[49].1, 2);
    }

    #[test]
    fn histogram_ignores_out_of_range_values_and_bad_bins() {
        let counts = histogram_counts(&[-1.0, 101.0], 0.0, 100.0, 10);
        assert!(counts.iter().all(|(_, c)| *c == 0));
        assert!(histogram_counts(&[1.0], 0.0, 100.0, 0).is_empty());
    }

    #[test]
    fn disabled_chart_reports_unavailable() {
        let residues = vec![ResidueRecord::new(1, "GLY", 50.0)];
        let metrics = GlobalMetrics {
            ptm: Some(0.5),
            ranking_score: Some(0.5),
            ..Default::default()
        };
        let analysis = Analysis::compute(residues, metrics, &RegionLayout::default()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.png");
        let result = DisabledChart.render(&analysis, &path);
        assert!(matches!(result, Err(ChartError::Unavailable(_))));
        assert!(!path.exists());
    }
}
