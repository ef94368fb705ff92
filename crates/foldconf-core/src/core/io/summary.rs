use crate::core::io::traits::PredictionFile;
use crate::core::models::metrics::{GlobalMetrics, MetricError};
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    InvalidMetric(#[from] MetricError),
}

/// Reads the flat summary-confidences mapping into validated [`GlobalMetrics`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryFile;

impl PredictionFile for SummaryFile {
    type Output = GlobalMetrics;
    type Error = SummaryError;

    fn read_from(&self, reader: &mut impl BufRead) -> Result<Self::Output, Self::Error> {
        let metrics: GlobalMetrics = serde_json::from_reader(reader)?;
        metrics.validate()?;
        Ok(metrics)
    }
}
