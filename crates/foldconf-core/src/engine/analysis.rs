use super::error::AnalysisError;
use crate::core::models::metrics::GlobalMetrics;
use crate::core::models::region::{Region, RegionLayout};
use crate::core::models::residue::{ConfidenceBand, ResidueRecord};
use crate::core::stats::descriptive::Summary;
use crate::core::stats::ranges::RangeList;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct BandBreakdown {
    pub band: ConfidenceBand,
    pub count: usize,
    pub percentage: f64,
    pub ranges: RangeList,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionStats {
    pub region: Region,
    pub summary: Summary,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EpitopeStats {
    pub region: Region,
    pub mean: f64,
    pub min: f64,
    pub count: usize,
    pub sequence: String, // One-letter codes of the residues present in the window
}

impl EpitopeStats {
    pub fn all_above(&self, threshold: f64) -> bool {
        self.min > threshold
    }
}

/// Everything the report and chart need, computed once from immutable inputs.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub residues: Vec<ResidueRecord>,
    pub metrics: GlobalMetrics,
    pub layout: RegionLayout,
    pub ptm: f64,
    pub ranking_score: f64,
    pub overall: Summary,
    pub bands: [BandBreakdown; 3],
    pub regions: Vec<RegionStats>,
    pub epitope: Option<EpitopeStats>,
}

impl Analysis {
    #[instrument(skip_all, name = "analysis")]
    pub fn compute(
        residues: Vec<ResidueRecord>,
        metrics: GlobalMetrics,
        layout: &RegionLayout,
    ) -> Result<Self, AnalysisError> {
        let ptm = metrics.ptm.ok_or(AnalysisError::MissingMetric("ptm"))?;
        let ranking_score = metrics
            .ranking_score
            .ok_or(AnalysisError::MissingMetric("ranking_score"))?;

        if let Some(r) = residues.iter().find(|r| !r.score.is_finite()) {
            return Err(AnalysisError::NonFiniteScore { index: r.index });
        }
        let scores: Vec<f64> = residues.iter().map(|r| r.score).collect();
        let overall = Summary::of(&scores).ok_or(AnalysisError::NoResidues)?;
        info!(
            "Analysing {} residues (mean pLDDT {:.2}).",
            overall.count, overall.mean
        );

        let bands = ConfidenceBand::ALL.map(|band| band_breakdown(&residues, band));
        let regions = layout
            .regions()
            .iter()
            .filter_map(|region| region_stats(&residues, region))
            .collect::<Vec<_>>();
        if regions.len() < layout.regions().len() {
            debug!(
                "{} region(s) have no residues and are omitted.",
                layout.regions().len() - regions.len()
            );
        }
        let epitope = epitope_stats(&residues, layout.epitope());

        Ok(Self {
            residues,
            metrics,
            layout: layout.clone(),
            ptm,
            ranking_score,
            overall,
            bands,
            regions,
            epitope,
        })
    }

    pub fn residue_count(&self) -> usize {
        self.residues.len()
    }

    pub fn band(&self, band: ConfidenceBand) -> &BandBreakdown {
        // `bands` follows the order of `ConfidenceBand::ALL`.
        &self.bands[band as usize]
    }

    /// Statistics for a layout region, `None` when no residues fell inside it.
    pub fn region(&self, region: &Region) -> Option<&RegionStats> {
        self.regions.iter().find(|s| &s.region == region)
    }

    pub fn region_mean(&self, region: &Region) -> Option<f64> {
        self.region(region).map(|s| s.summary.mean)
    }
}

fn band_breakdown(residues: &[ResidueRecord], band: ConfidenceBand) -> BandBreakdown {
    let indices: Vec<isize> = residues
        .iter()
        .filter(|r| r.band() == band)
        .map(|r| r.index)
        .collect();
    let count = indices.len();
    BandBreakdown {
        band,
        count,
        percentage: count as f64 / residues.len() as f64 * 100.0,
        ranges: RangeList::compress(indices),
    }
}

fn scores_in(residues: &[ResidueRecord], region: &Region) -> Vec<f64> {
    residues
        .iter()
        .filter(|r| region.contains(r.index))
        .map(|r| r.score)
        .collect()
}

fn region_stats(residues: &[ResidueRecord], region: &Region) -> Option<RegionStats> {
    let summary = Summary::of(&scores_in(residues, region))?;
    Some(RegionStats {
        region: region.clone(),
        summary,
    })
}

fn epitope_stats(residues: &[ResidueRecord], region: &Region) -> Option<EpitopeStats> {
    let summary = Summary::of(&scores_in(residues, region))?;
    let sequence = residues
        .iter()
        .filter(|r| region.contains(r.index))
        .map(ResidueRecord::one_letter_code)
        .collect();
    Some(EpitopeStats {
        region: region.clone(),
        mean: summary.mean,
        min: summary.min,
        count: summary.count,
        sequence,
    })
}
