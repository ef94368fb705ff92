use crate::core::io::traits::PredictionFile;
use crate::core::models::residue::ResidueRecord;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::{debug, trace};

const ATOM_SITE_PREFIX: &str = "_atom_site.";
const ATOM_RECORD: &str = "ATOM";

#[derive(Debug, Error)]
pub enum CifError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("No '{anchor}' atom rows with confidence values found in _atom_site block")]
    NoResidues { anchor: String },
    #[error("Confidence {score} on line {line} is outside [0, 100]")]
    ScoreOutOfRange { line: usize, score: f64 },
    #[error(
        "Residue index {index} on line {line} does not follow previous index {previous}; expected strictly increasing indices"
    )]
    NonIncreasingIndex {
        line: usize,
        index: isize,
        previous: isize,
    },
    #[error(
        "Column {position} is declared as '_atom_site.{found}' but the {field} field expects one of {expected:?}"
    )]
    SchemaMismatch {
        field: &'static str,
        position: usize,
        found: String,
        expected: &'static [&'static str],
    },
    #[error("Invalid atom-site schema: {0}")]
    InvalidSchema(String),
}

/// Maps each extracted field to its 1-based position in a whitespace-tokenized `ATOM` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomSiteSchema {
    pub atom_name: usize,
    pub residue_label: usize,
    pub residue_index: usize,
    pub confidence: usize,
    pub anchor_atom: String,
}

impl Default for AtomSiteSchema {
    fn default() -> Self {
        Self {
            atom_name: 4,
            residue_label: 6,
            residue_index: 9,
            confidence: 15,
            anchor_atom: "CA".to_string(),
        }
    }
}

impl AtomSiteSchema {
    pub fn validate(&self) -> Result<(), CifError> {
        let positions = self.positions();
        if positions.iter().any(|(_, p, _)| *p == 0) {
            return Err(CifError::InvalidSchema(
                "field positions are 1-based and must be at least 1".into(),
            ));
        }
        for (i, (name_a, pos_a, _)) in positions.iter().enumerate() {
            if let Some((name_b, _, _)) = positions[i + 1..].iter().find(|(_, p, _)| p == pos_a) {
                return Err(CifError::InvalidSchema(format!(
                    "fields '{}' and '{}' share position {}",
                    name_a, name_b, pos_a
                )));
            }
        }
        if self.anchor_atom.trim().is_empty() {
            return Err(CifError::InvalidSchema("anchor atom cannot be empty".into()));
        }
        Ok(())
    }

    /// Rows with fewer tokens than this are skipped.
    pub fn min_fields(&self) -> usize {
        self.positions()
            .iter()
            .map(|(_, p, _)| *p)
            .max()
            .unwrap_or(0)
    }

    fn positions(&self) -> [(&'static str, usize, &'static [&'static str]); 4] {
        [
            ("atom-name", self.atom_name, &["label_atom_id", "auth_atom_id"]),
            ("residue-label", self.residue_label, &["label_comp_id", "auth_comp_id"]),
            ("residue-index", self.residue_index, &["label_seq_id", "auth_seq_id"]),
            ("confidence", self.confidence, &["B_iso_or_equiv"]),
        ]
    }

    /// Checks the declared `_atom_site.*` column names against the configured positions.
    fn check_header(&self, columns: &[String]) -> Result<(), CifError> {
        for (field, position, expected) in self.positions() {
            let found = columns
                .get(position - 1)
                .map(String::as_str)
                .unwrap_or("<missing>");
            if !expected.contains(&found) {
                return Err(CifError::SchemaMismatch {
                    field,
                    position,
                    found: found.to_string(),
                    expected,
                });
            }
        }
        Ok(())
    }

    #[inline]
    fn field<'a>(&self, parts: &[&'a str], position: usize) -> &'a str {
        parts[position - 1]
    }
}

/// Extracts per-residue confidence from the `_atom_site` loop of an mmCIF file.
#[derive(Debug, Clone, Default)]
pub struct CifConfidenceFile {
    schema: AtomSiteSchema,
}

impl CifConfidenceFile {
    pub fn new(schema: AtomSiteSchema) -> Self {
        Self { schema }
    }
}

impl PredictionFile for CifConfidenceFile {
    type Output = Vec<ResidueRecord>;
    type Error = CifError;

    fn read_from(&self, reader: &mut impl BufRead) -> Result<Self::Output, Self::Error> {
        self.schema.validate()?;
        let min_fields = self.schema.min_fields();

        let mut residues: Vec<ResidueRecord> = Vec::new();
        let mut columns: Vec<String> = Vec::new();
        let mut in_atom_site = false;
        let mut header_checked = false;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            if let Some(column) = line.strip_prefix(ATOM_SITE_PREFIX) {
                in_atom_site = true;
                columns.push(column.trim().to_string());
                continue;
            }
            if !in_atom_site || !line.starts_with(ATOM_RECORD) {
                continue;
            }

            if !header_checked {
                self.schema.check_header(&columns)?;
                header_checked = true;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.first() != Some(&ATOM_RECORD) || parts.len() < min_fields {
                trace!("Skipping short row on line {}", line_num);
                continue;
            }
            if self.schema.field(&parts, self.schema.atom_name) != self.schema.anchor_atom {
                continue;
            }

            let index_str = self.schema.field(&parts, self.schema.residue_index);
            let score_str = self.schema.field(&parts, self.schema.confidence);
            let (Ok(index), Ok(score)) = (index_str.parse::<isize>(), score_str.parse::<f64>())
            else {
                debug!(
                    "Skipping malformed row on line {} (index: '{}', confidence: '{}')",
                    line_num, index_str, score_str
                );
                continue;
            };

            if !(0.0..=100.0).contains(&score) {
                return Err(CifError::ScoreOutOfRange {
                    line: line_num,
                    score,
                });
            }
            if let Some(previous) = residues.last() {
                if index <= previous.index {
                    return Err(CifError::NonIncreasingIndex {
                        line: line_num,
                        index,
                        previous: previous.index,
                    });
                }
            }

            let label = self.schema.field(&parts, self.schema.residue_label);
            residues.push(ResidueRecord::new(index, label, score));
        }

        if residues.is_empty() {
            return Err(CifError::NoResidues {
                anchor: self.schema.anchor_atom.clone(),
            });
        }
        debug!("Extracted {} residue records", residues.len());
        Ok(residues)
    }
}
