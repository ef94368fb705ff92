use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MetricError {
    #[error("Metric '{field}' has invalid value {value}: {reason}")]
    Invalid {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Clash indicator as emitted by the predictor: older outputs use `0.0`/`1.0`, newer ones booleans.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ClashFlag {
    Bool(bool),
    Number(f64),
}

impl ClashFlag {
    pub fn is_clashing(&self) -> bool {
        match *self {
            ClashFlag::Bool(b) => b,
            ClashFlag::Number(n) => n != 0.0,
        }
    }
}

/// Whole-structure quality summary loaded once from the summary-confidences file.
///
/// Every field is optional; unknown keys in the source mapping are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GlobalMetrics {
    #[serde(default)]
    pub ptm: Option<f64>,
    #[serde(default)]
    pub iptm: Option<f64>,
    #[serde(default)]
    pub ranking_score: Option<f64>,
    #[serde(default)]
    pub fraction_disordered: Option<f64>,
    #[serde(default)]
    pub has_clash: Option<ClashFlag>,
    #[serde(default)]
    pub num_recycles: Option<f64>,
}

impl GlobalMetrics {
    /// Checks the value ranges of every present field.
    pub fn validate(&self) -> Result<(), MetricError> {
        check_unit_interval("ptm", self.ptm)?;
        check_unit_interval("iptm", self.iptm)?;
        check_unit_interval("fraction_disordered", self.fraction_disordered)?;

        if let Some(score) = self.ranking_score {
            if !score.is_finite() || !(-100.0..=100.0).contains(&score) {
                return Err(MetricError::Invalid {
                    field: "ranking_score",
                    value: score,
                    reason: "expected a finite value in [-100, 100]",
                });
            }
        }

        if let Some(ClashFlag::Number(n)) = self.has_clash {
            if !n.is_finite() {
                return Err(MetricError::Invalid {
                    field: "has_clash",
                    value: n,
                    reason: "expected a boolean or a finite number",
                });
            }
        }

        if let Some(recycles) = self.num_recycles {
            if !recycles.is_finite() || recycles < 0.0 || recycles.fract() != 0.0 {
                return Err(MetricError::Invalid {
                    field: "num_recycles",
                    value: recycles,
                    reason: "expected a non-negative integer",
                });
            }
        }

        Ok(())
    }

    pub fn has_clash(&self) -> Option<bool> {
        self.has_clash.map(|flag| flag.is_clashing())
    }

    pub fn recycle_count(&self) -> Option<u64> {
        self.num_recycles.map(|n| n as u64)
    }
}

fn check_unit_interval(field: &'static str, value: Option<f64>) -> Result<(), MetricError> {
    match value {
        Some(v) if !v.is_finite() || !(0.0..=1.0).contains(&v) => Err(MetricError::Invalid {
            field,
            value: v,
            reason: "expected a finite value in [0, 1]",
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_summary_and_ignores_unknown_keys() {
        let json = r#"{
            "chain_iptm": [null],
            "chain_pair_pae_min": [[0.76]],
            "fraction_disordered": 0.58,
            "has_clash": 0.0,
            "iptm": null,
            "num_recycles": 10.0,
            "ptm": 0.42,
            "ranking_score": 0.71
        }"#;
        let metrics: GlobalMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(metrics.ptm, Some(0.42));
        assert_eq!(metrics.iptm, None);
        assert_eq!(metrics.ranking_score, Some(0.71));
        assert_eq!(metrics.fraction_disordered, Some(0.58));
        assert_eq!(metrics.has_clash(), Some(false));
        assert_eq!(metrics.recycle_count(), Some(10));
        assert!(metrics.validate().is_ok());
    }

    #[test]
    fn missing_fields_default_to_none() {
        let metrics: GlobalMetrics = serde_json::from_str("{}").unwrap();
        assert_eq!(metrics, GlobalMetrics::default());
        assert!(metrics.validate().is_ok());
        assert_eq!(metrics.has_clash(), None);
    }

    #[test]
    fn clash_flag_accepts_booleans_and_numbers() {
        let metrics: GlobalMetrics = serde_json::from_str(r#"{"has_clash": true}"#).unwrap();
        assert_eq!(metrics.has_clash(), Some(true));
        let metrics: GlobalMetrics = serde_json::from_str(r#"{"has_clash": 1}"#).unwrap();
        assert_eq!(metrics.has_clash(), Some(true));
    }

    #[test]
    fn validate_rejects_out_of_range_ptm() {
        let metrics = GlobalMetrics {
            ptm: Some(1.5),
            ..Default::default()
        };
        assert!(matches!(
            metrics.validate(),
            Err(MetricError::Invalid { field: "ptm", .. })
        ));
    }

    #[test]
    fn validate_rejects_fractional_recycle_count() {
        let metrics = GlobalMetrics {
            num_recycles: Some(2.5),
            ..Default::default()
        };
        assert!(matches!(
            metrics.validate(),
            Err(MetricError::Invalid {
                field: "num_recycles",
                ..
            })
        ));
    }

    #[test]
    fn validate_rejects_disorder_fraction_above_one() {
        let metrics = GlobalMetrics {
            fraction_disordered: Some(58.0),
            ..Default::default()
        };
        assert!(metrics.validate().is_err());
    }

    #[test]
    fn wrongly_typed_field_fails_to_deserialize() {
        let result: Result<GlobalMetrics, _> = serde_json::from_str(r#"{"ptm": "high"}"#);
        assert!(result.is_err());
    }
}
