//! Text rendering of an [`Analysis`](crate::engine::analysis::Analysis).
//!
//! [`render::render_report`] builds the full multi-section document, [`ascii::write_report`]
//! writes its ASCII rendition, and [`console::summary_lines`] produces the short console recap.
//! The qualitative labels are driven by the constants in [`thresholds`].

pub mod ascii;
pub mod console;
pub mod render;
pub mod thresholds;

use crate::core::models::target::TargetProfile;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Identity and file names referenced by the report text.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    pub profile: &'a TargetProfile,
    pub model_path: &'a Path,
    pub summary_path: &'a Path,
    pub report_path: &'a Path,
    pub plot_path: Option<&'a Path>,
}

impl ReportContext<'_> {
    /// File stem of the coordinate file, shown as the model name.
    pub fn model_name(&self) -> String {
        self.model_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
