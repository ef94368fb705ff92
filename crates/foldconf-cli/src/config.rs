mod defaults;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use foldconf::core::io::cif::AtomSiteSchema;
use foldconf::core::models::region::{Region, RegionLayout};
use foldconf::core::models::target::{ReferenceStructure, TargetProfile};
use foldconf::workflows::analyze::{AnalyzeConfig, AnalyzeConfigBuilder};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
struct PartialRegion {
    name: String,
    start: isize,
    end: isize,
}

impl From<PartialRegion> for Region {
    fn from(p: PartialRegion) -> Self {
        Self {
            name: p.name,
            start: p.start,
            end: p.end,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
struct PartialReference {
    #[serde(rename = "pdb-id")]
    pdb_id: String,
    note: String,
}

impl From<PartialReference> for ReferenceStructure {
    fn from(p: PartialReference) -> Self {
        Self {
            pdb_id: p.pdb_id,
            note: p.note,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialTargetConfig {
    name: Option<String>,
    gene: Option<String>,
    uniprot: Option<String>,
    method: Option<String>,
    #[serde(rename = "prediction-date")]
    prediction_date: Option<String>,
    regions: Option<Vec<PartialRegion>>,
    epitope: Option<PartialRegion>,
    references: Option<Vec<PartialReference>>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialSchemaConfig {
    #[serde(rename = "atom-name")]
    atom_name: Option<usize>,
    #[serde(rename = "residue-label")]
    residue_label: Option<usize>,
    #[serde(rename = "residue-index")]
    residue_index: Option<usize>,
    confidence: Option<usize>,
    #[serde(rename = "anchor-atom")]
    anchor_atom: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialInputConfig {
    cif: Option<PathBuf>,
    summary: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    report: Option<PathBuf>,
    plot: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialAnalyzeConfig {
    input: Option<PartialInputConfig>,
    output: Option<PartialOutputConfig>,
    target: Option<PartialTargetConfig>,
    schema: Option<PartialSchemaConfig>,
}

impl PartialAnalyzeConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Reads the config file when one was given; otherwise every value falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Resolves every setting with precedence command line > config file > built-in default.
    pub fn merge_with_cli(self, args: &Cli) -> Result<AnalyzeConfig> {
        let defaults = DefaultsConfig::default();
        let input = self.input.unwrap_or_default();
        let output = self.output.unwrap_or_default();

        let plot_path = if args.no_plot {
            None
        } else {
            Some(
                args.plot
                    .clone()
                    .or(output.plot)
                    .unwrap_or(defaults.plot_path),
            )
        };

        AnalyzeConfigBuilder::new()
            .cif_path(args.cif.clone().or(input.cif).unwrap_or(defaults.cif_path))
            .summary_path(
                args.summary
                    .clone()
                    .or(input.summary)
                    .unwrap_or(defaults.summary_path),
            )
            .report_path(
                args.report
                    .clone()
                    .or(output.report)
                    .unwrap_or(defaults.report_path),
            )
            .plot_path(plot_path)
            .schema(Self::merge_schema(self.schema)?)
            .profile(Self::merge_target(self.target)?)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    fn merge_schema(partial: Option<PartialSchemaConfig>) -> Result<AtomSiteSchema> {
        let partial = partial.unwrap_or_default();
        let defaults = AtomSiteSchema::default();
        let schema = AtomSiteSchema {
            atom_name: partial.atom_name.unwrap_or(defaults.atom_name),
            residue_label: partial.residue_label.unwrap_or(defaults.residue_label),
            residue_index: partial.residue_index.unwrap_or(defaults.residue_index),
            confidence: partial.confidence.unwrap_or(defaults.confidence),
            anchor_atom: partial.anchor_atom.unwrap_or(defaults.anchor_atom),
        };
        schema
            .validate()
            .map_err(|e| CliError::Config(format!("[schema]: {}", e)))?;
        Ok(schema)
    }

    fn merge_target(partial: Option<PartialTargetConfig>) -> Result<TargetProfile> {
        let Some(partial) = partial else {
            return Ok(TargetProfile::default());
        };
        let defaults = TargetProfile::default();

        let layout = if partial.regions.is_none() && partial.epitope.is_none() {
            defaults.layout
        } else {
            let regions = match partial.regions {
                Some(regions) => regions.into_iter().map(Into::into).collect(),
                None => defaults.layout.regions().to_vec(),
            };
            let epitope = partial
                .epitope
                .map(Into::into)
                .unwrap_or_else(|| defaults.layout.epitope().clone());
            RegionLayout::new(regions, epitope)
                .map_err(|e| CliError::Config(format!("[target]: {}", e)))?
        };

        Ok(TargetProfile {
            name: partial.name.unwrap_or(defaults.name),
            gene: partial.gene.unwrap_or(defaults.gene),
            uniprot: partial.uniprot.unwrap_or(defaults.uniprot),
            method: partial.method.unwrap_or(defaults.method),
            prediction_date: partial.prediction_date.unwrap_or(defaults.prediction_date),
            reference_structures: partial
                .references
                .map(|refs| refs.into_iter().map(Into::into).collect())
                .unwrap_or(defaults.reference_structures),
            layout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn write_config_file(dir: &TempDir, content: &str) -> PathBuf {
        let file_path = dir.path().join("foldconf.toml");
        fs::write(&file_path, content).unwrap();
        file_path
    }

    fn merge(args: &[&str], config: Option<&Path>) -> Result<AnalyzeConfig> {
        let cli = Cli::parse_from(std::iter::once("foldconf").chain(args.iter().copied()));
        PartialAnalyzeConfig::load(config)?.merge_with_cli(&cli)
    }

    #[test]
    fn bare_invocation_uses_conventional_file_names() {
        let config = merge(&[], None).unwrap();
        assert_eq!(config.cif_path, PathBuf::from("P78358.cif"));
        assert_eq!(
            config.summary_path,
            PathBuf::from("P78358_summary_confidences.json")
        );
        assert_eq!(config.report_path, PathBuf::from("model_info.txt"));
        assert_eq!(
            config.plot_path,
            Some(PathBuf::from("ny_eso1_confidence_plot.png"))
        );
        assert_eq!(config.schema, AtomSiteSchema::default());
        assert_eq!(config.profile, TargetProfile::default());
    }

    #[test]
    fn load_from_file_and_merge_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(
            &dir,
            r#"
            [input]
            cif = "fold_model_0.cif"

            [output]
            report = "report.txt"

            [target]
            name = "MAGE-A4"
            gene = "MAGEA4"
            uniprot = "P43358"

            [[target.regions]]
            name = "N-terminus"
            start = 1
            end = 100

            [[target.regions]]
            name = "MHD"
            start = 101
            end = 300

            [[target.regions]]
            name = "C-terminus"
            start = 301
            end = 317

            [target.epitope]
            name = "GVYDGREHTV"
            start = 230
            end = 239

            [schema]
            anchor-atom = "CB"
            "#,
        );

        let config = merge(&[], Some(&path)).unwrap();
        assert_eq!(config.cif_path, PathBuf::from("fold_model_0.cif"));
        assert_eq!(
            config.summary_path,
            PathBuf::from("P78358_summary_confidences.json")
        );
        assert_eq!(config.report_path, PathBuf::from("report.txt"));
        assert_eq!(config.profile.display_name(), "MAGE-A4 (MAGEA4)");
        assert_eq!(config.profile.method, "AlphaFold3");
        assert_eq!(config.profile.chain_length(), 317);
        assert_eq!(config.profile.layout.epitope().bounds(), "230-239");
        assert_eq!(config.schema.anchor_atom, "CB");
        assert_eq!(config.schema.confidence, 15);
    }

    #[test]
    fn cli_args_override_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(
            &dir,
            r#"
            [input]
            cif = "from_file.cif"

            [output]
            plot = "from_file.png"
            "#,
        );

        let config = merge(&["--cif", "from_cli.cif", "--plot", "cli.png"], Some(&path)).unwrap();
        assert_eq!(config.cif_path, PathBuf::from("from_cli.cif"));
        assert_eq!(config.plot_path, Some(PathBuf::from("cli.png")));
    }

    #[test]
    fn no_plot_flag_disables_chart_even_when_file_sets_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(&dir, "[output]\nplot = \"from_file.png\"\n");
        let config = merge(&["--no-plot"], Some(&path)).unwrap();
        assert_eq!(config.plot_path, None);
    }

    #[test]
    fn epitope_alone_keeps_default_regions() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(
            &dir,
            "[target.epitope]\nname = \"ESO 157-170\"\nstart = 157\nend = 170\n",
        );
        let config = merge(&[], Some(&path)).unwrap();
        let layout = &config.profile.layout;
        assert_eq!(layout.regions(), RegionLayout::default().regions());
        assert_eq!(layout.epitope().end, 170);
    }

    #[test]
    fn wrong_region_count_returns_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(
            &dir,
            "[[target.regions]]\nname = \"all\"\nstart = 1\nend = 180\n",
        );
        let result = merge(&[], Some(&path));
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("exactly 3")));
    }

    #[test]
    fn conflicting_schema_positions_return_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(&dir, "[schema]\nconfidence = 9\n");
        let result = merge(&[], Some(&path));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(&dir, "[output]\nchart = \"x.png\"\n");
        let result = PartialAnalyzeConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn missing_config_file_reports_its_path() {
        let err = PartialAnalyzeConfig::from_file(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.toml"));
    }
}
