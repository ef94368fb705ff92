use crate::cli::Cli;
use crate::config::PartialAnalyzeConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use foldconf::engine::progress::ProgressReporter;
use foldconf::plot::{self, ChartError, ChartRenderer, DisabledChart};
use foldconf::report::console;
use foldconf::workflows;
use tracing::info;

pub fn run(args: &Cli) -> Result<()> {
    let partial_config = PartialAnalyzeConfig::load(args.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(args)?;

    let renderer: Box<dyn ChartRenderer> = if config.plot_path.is_some() {
        plot::default_renderer()
    } else {
        Box::new(DisabledChart)
    };

    let progress_handler = if args.quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Analyzing {} ({})...",
        config.profile.display_name(),
        config.cif_path.display()
    );
    info!("Invoking the core analysis workflow...");

    let outcome = workflows::analyze::run(&config, renderer.as_ref(), &reporter)?;

    info!(
        "Workflow finished: {} residues analysed.",
        outcome.analysis.residue_count()
    );

    println!();
    for line in console::summary_lines(&outcome.analysis) {
        println!("{}", line);
    }

    println!("✓ Report written to: {}", outcome.report_path.display());
    match (&outcome.plot_path, &outcome.chart_error) {
        (Some(path), _) => println!("✓ Chart written to: {}", path.display()),
        (None, Some(err)) => println!("Chart skipped: {}", chart_skip_reason(err)),
        (None, None) => info!("Chart generation disabled."),
    }

    Ok(())
}

fn chart_skip_reason(err: &ChartError) -> String {
    match err {
        ChartError::Unavailable(_) => "plotting is unavailable in this build".to_string(),
        ChartError::Render { .. } => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_reason_distinguishes_missing_backend_from_render_failure() {
        let unavailable = ChartError::Unavailable("chart rendering is disabled");
        assert_eq!(
            chart_skip_reason(&unavailable),
            "plotting is unavailable in this build"
        );

        let render = ChartError::Render {
            path: "out/plot.png".to_string(),
            message: "No such file or directory".to_string(),
        };
        let reason = chart_skip_reason(&render);
        assert!(reason.contains("out/plot.png"));
        assert!(reason.contains("No such file or directory"));
        assert!(!reason.contains("unavailable"));
    }
}
