//! Fixed cut-offs behind the qualitative labels in the report.

pub use crate::core::models::residue::{HIGH_CONFIDENCE_THRESHOLD, MEDIUM_CONFIDENCE_THRESHOLD};

/// pTM above this is "high" quality.
pub const PTM_HIGH: f64 = 0.8;
/// pTM above this (and not high) is "moderate" quality.
pub const PTM_MODERATE: f64 = 0.6;

/// Mean pLDDT above this is "good" overall confidence.
pub const MEAN_GOOD: f64 = 80.0;
/// Mean pLDDT above this (and not good) is "moderate" overall confidence.
pub const MEAN_MODERATE: f64 = 70.0;

/// N-terminal mean below this is the expected low-moderate confidence of a disordered region.
pub const DISORDERED_REGION_MAX: f64 = 80.0;

/// Epitope mean above this supports reliable structural analysis.
pub const EPITOPE_HIGH: f64 = 85.0;
/// Epitope mean above this (and not high) should be interpreted with caution.
pub const EPITOPE_MODERATE: f64 = 70.0;
/// Every epitope residue must score above this for the "all residues" check.
pub const EPITOPE_FLOOR: f64 = 70.0;

/// High and medium bands list at most this many ranges verbatim.
pub const MAX_LISTED_RANGES: usize = 15;

pub fn ptm_quality(ptm: f64) -> &'static str {
    if ptm > PTM_HIGH {
        "high"
    } else if ptm > PTM_MODERATE {
        "moderate"
    } else {
        "low"
    }
}

pub fn mean_confidence(mean: f64) -> &'static str {
    if mean > MEAN_GOOD {
        "good"
    } else if mean > MEAN_MODERATE {
        "moderate"
    } else {
        "low"
    }
}

pub fn epitope_assessment(mean: f64) -> &'static str {
    if mean > EPITOPE_HIGH {
        "High - suitable for structural analysis"
    } else if mean > EPITOPE_MODERATE {
        "Moderate - interpret with caution"
    } else {
        "Low - use with caution"
    }
}

/// Short epitope label for console output.
pub fn epitope_quality(mean: f64) -> &'static str {
    if mean > EPITOPE_HIGH {
        "High \u{2713}"
    } else if mean > EPITOPE_MODERATE {
        "Moderate"
    } else {
        "Low"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ptm_quality_ladder() {
        assert_eq!(ptm_quality(0.81), "high");
        assert_eq!(ptm_quality(0.8), "moderate");
        assert_eq!(ptm_quality(0.61), "moderate");
        assert_eq!(ptm_quality(0.6), "low");
    }

    #[test]
    fn mean_confidence_ladder() {
        assert_eq!(mean_confidence(85.0), "good");
        assert_eq!(mean_confidence(80.0), "moderate");
        assert_eq!(mean_confidence(70.0), "low");
    }

    #[test]
    fn epitope_ladders() {
        assert!(epitope_assessment(95.0).starts_with("High"));
        assert!(epitope_assessment(85.0).starts_with("Moderate"));
        assert!(epitope_assessment(70.0).starts_with("Low"));
        assert_eq!(epitope_quality(71.0), "Moderate");
    }
}
