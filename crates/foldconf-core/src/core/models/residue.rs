use phf::{Map, phf_map};
use std::fmt;

/// Lower bound (exclusive) of the high-confidence band.
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 90.0;
/// Lower bound (inclusive) of the medium-confidence band.
pub const MEDIUM_CONFIDENCE_THRESHOLD: f64 = 70.0;

static ONE_LETTER_CODES: Map<&'static str, char> = phf_map! {
    "ALA" => 'A', "ARG" => 'R', "ASN" => 'N', "ASP" => 'D', "CYS" => 'C',
    "GLN" => 'Q', "GLU" => 'E', "GLY" => 'G', "HIS" => 'H', "ILE" => 'I',
    "LEU" => 'L', "LYS" => 'K', "MET" => 'M', "PHE" => 'F', "PRO" => 'P',
    "SER" => 'S', "THR" => 'T', "TRP" => 'W', "TYR" => 'Y', "VAL" => 'V',
    "HSE" => 'H', "HSD" => 'H', "HSP" => 'H', "HIE" => 'H', "HID" => 'H', "HIP" => 'H',
    "MSE" => 'M', "SEC" => 'U', "PYL" => 'O',
};

/// One residue of the predicted model, taken from its anchor atom row.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidueRecord {
    pub index: isize,  // 1-based residue sequence number
    pub label: String, // Three-letter residue code (e.g., "GLY")
    pub score: f64,    // Per-residue confidence (pLDDT) in [0, 100]
}

impl ResidueRecord {
    pub fn new(index: isize, label: &str, score: f64) -> Self {
        Self {
            index,
            label: label.to_string(),
            score,
        }
    }

    pub fn band(&self) -> ConfidenceBand {
        ConfidenceBand::classify(self.score)
    }

    /// One-letter amino-acid code, `'X'` for anything unrecognized.
    pub fn one_letter_code(&self) -> char {
        one_letter_code(&self.label)
    }
}

pub fn one_letter_code(label: &str) -> char {
    ONE_LETTER_CODES
        .get(label.trim().to_ascii_uppercase().as_str())
        .copied()
        .unwrap_or('X')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
}

impl ConfidenceBand {
    pub const ALL: [ConfidenceBand; 3] = [Self::High, Self::Medium, Self::Low];

    pub fn classify(score: f64) -> Self {
        if score > HIGH_CONFIDENCE_THRESHOLD {
            Self::High
        } else if score >= MEDIUM_CONFIDENCE_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Threshold description used in report headings.
    pub fn criterion(&self) -> &'static str {
        match self {
            Self::High => "pLDDT >90",
            Self::Medium => "pLDDT 70-90",
            Self::Low => "pLDDT <70",
        }
    }
}

impl fmt::Display for ConfidenceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        };
        write!(f, "{}", name)
    }
}
