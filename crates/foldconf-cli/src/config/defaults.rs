use std::path::PathBuf;

/// File names used when neither the command line nor the config file names a path.
pub struct DefaultsConfig {
    pub cif_path: PathBuf,
    pub summary_path: PathBuf,
    pub report_path: PathBuf,
    pub plot_path: PathBuf,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            cif_path: PathBuf::from("P78358.cif"),
            summary_path: PathBuf::from("P78358_summary_confidences.json"),
            report_path: PathBuf::from("model_info.txt"),
            plot_path: PathBuf::from("ny_eso1_confidence_plot.png"),
        }
    }
}
