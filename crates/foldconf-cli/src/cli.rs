use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "foldconf - Per-residue confidence analysis for AlphaFold3 structure predictions.",
    long_about = "Reads an AlphaFold3 mmCIF model and its summary-confidence JSON, writes a plain-text \
                  confidence report and renders a two-panel pLDDT chart.\n\n\
                  Every flag is optional: a bare invocation reads P78358.cif and \
                  P78358_summary_confidences.json from the working directory.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    // --- Inputs ---
    /// Path to the predicted structure in mmCIF format.
    #[arg(long, value_name = "PATH")]
    pub cif: Option<PathBuf>,

    /// Path to the summary-confidence JSON written alongside the model.
    #[arg(long, value_name = "PATH")]
    pub summary: Option<PathBuf>,

    // --- Outputs ---
    /// Path for the plain-text report.
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Path for the confidence chart image.
    #[arg(long, value_name = "PATH", conflicts_with = "no_plot")]
    pub plot: Option<PathBuf>,

    /// Skip chart generation.
    #[arg(long)]
    pub no_plot: bool,

    /// Path to a configuration file in TOML format (target profile, field schema, paths).
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Logging ---
    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
