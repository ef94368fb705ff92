use crate::core::io::cif::{AtomSiteSchema, CifConfidenceFile, CifError};
use crate::core::io::summary::{SummaryError, SummaryFile};
use crate::core::io::traits::PredictionFile;
use crate::core::models::target::TargetProfile;
use crate::engine::analysis::Analysis;
use crate::engine::error::AnalysisError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::plot::{ChartError, ChartRenderer};
use crate::report::ascii::write_report;
use crate::report::render::render_report;
use crate::report::{ReportContext, ReportError};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Failed to read summary metrics '{path}': {source}", path = path.display())]
    Summary {
        path: PathBuf,
        #[source]
        source: SummaryError,
    },

    #[error("Failed to extract residues from '{path}': {source}", path = path.display())]
    Structure {
        path: PathBuf,
        #[source]
        source: CifError,
    },

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeConfig {
    pub cif_path: PathBuf,
    pub summary_path: PathBuf,
    pub report_path: PathBuf,
    pub plot_path: Option<PathBuf>,
    pub schema: AtomSiteSchema,
    pub profile: TargetProfile,
}

#[derive(Default)]
pub struct AnalyzeConfigBuilder {
    cif_path: Option<PathBuf>,
    summary_path: Option<PathBuf>,
    report_path: Option<PathBuf>,
    plot_path: Option<PathBuf>,
    schema: Option<AtomSiteSchema>,
    profile: Option<TargetProfile>,
}

impl AnalyzeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cif_path(mut self, path: PathBuf) -> Self {
        self.cif_path = Some(path);
        self
    }
    pub fn summary_path(mut self, path: PathBuf) -> Self {
        self.summary_path = Some(path);
        self
    }
    pub fn report_path(mut self, path: PathBuf) -> Self {
        self.report_path = Some(path);
        self
    }
    pub fn plot_path(mut self, path: Option<PathBuf>) -> Self {
        self.plot_path = path;
        self
    }
    pub fn schema(mut self, schema: AtomSiteSchema) -> Self {
        self.schema = Some(schema);
        self
    }
    pub fn profile(mut self, profile: TargetProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Schema and profile fall back to their defaults; the three paths are required.
    pub fn build(self) -> Result<AnalyzeConfig, ConfigError> {
        Ok(AnalyzeConfig {
            cif_path: self
                .cif_path
                .ok_or(ConfigError::MissingParameter("cif_path"))?,
            summary_path: self
                .summary_path
                .ok_or(ConfigError::MissingParameter("summary_path"))?,
            report_path: self
                .report_path
                .ok_or(ConfigError::MissingParameter("report_path"))?,
            plot_path: self.plot_path,
            schema: self.schema.unwrap_or_default(),
            profile: self.profile.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct AnalyzeOutcome {
    pub analysis: Analysis,
    pub report_path: PathBuf,
    pub plot_path: Option<PathBuf>, // Set only when the chart was actually written
    pub chart_error: Option<ChartError>,
}

#[instrument(skip_all, name = "analyze_workflow")]
pub fn run(
    config: &AnalyzeConfig,
    chart: &dyn ChartRenderer,
    reporter: &ProgressReporter,
) -> Result<AnalyzeOutcome, WorkflowError> {
    reporter.report(Progress::PhaseStart {
        name: "Loading summary metrics",
    });
    let metrics = SummaryFile
        .read_from_path(&config.summary_path)
        .map_err(|source| WorkflowError::Summary {
            path: config.summary_path.clone(),
            source,
        })?;
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Extracting per-residue confidence",
    });
    let residues = CifConfidenceFile::new(config.schema.clone())
        .read_from_path(&config.cif_path)
        .map_err(|source| WorkflowError::Structure {
            path: config.cif_path.clone(),
            source,
        })?;
    reporter.report(Progress::Message(format!(
        "Extracted {} residues",
        residues.len()
    )));
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Computing statistics",
    });
    let analysis = Analysis::compute(residues, metrics, &config.profile.layout)?;
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Writing report",
    });
    let ctx = ReportContext {
        profile: &config.profile,
        model_path: &config.cif_path,
        summary_path: &config.summary_path,
        report_path: &config.report_path,
        plot_path: config.plot_path.as_deref(),
    };
    let report = render_report(&analysis, &ctx);
    write_report(&report, &config.report_path)?;
    reporter.report(Progress::PhaseFinish);

    let (plot_path, chart_error) = match &config.plot_path {
        Some(path) => match render_chart(chart, &analysis, path, reporter) {
            Ok(()) => (Some(path.clone()), None),
            Err(e) => (None, Some(e)),
        },
        None => {
            info!("Chart output not requested; skipping.");
            (None, None)
        }
    };

    Ok(AnalyzeOutcome {
        analysis,
        report_path: config.report_path.clone(),
        plot_path,
        chart_error,
    })
}

fn render_chart(
    chart: &dyn ChartRenderer,
    analysis: &Analysis,
    path: &Path,
    reporter: &ProgressReporter,
) -> Result<(), ChartError> {
    reporter.report(Progress::PhaseStart {
        name: "Rendering chart",
    });
    let result = chart.render(analysis, path);
    reporter.report(Progress::PhaseFinish);
    if let Err(e) = &result {
        warn!("Skipping chart generation: {}", e);
    }
    result
}
