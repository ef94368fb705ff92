/// Descriptive statistics over a non-empty sample of scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64, // Population standard deviation (divides by n)
    pub min: f64,
    pub max: f64,
}

impl Summary {
    /// Returns `None` for an empty sample or one holding a NaN or infinite value; callers omit
    /// the statistic instead of reporting zeros.
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() || values.iter().any(|v| !v.is_finite()) {
            return None;
        }

        let count = values.len();
        let n = count as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let mid = count / 2;
        let median = if count % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        Some(Self {
            count,
            // Summation rounding can leave the mean a ulp outside [min, max].
            mean: mean.clamp(sorted[0], sorted[count - 1]),
            median,
            std_dev: variance.sqrt(),
            min: sorted[0],
            max: sorted[count - 1],
        })
    }
}
