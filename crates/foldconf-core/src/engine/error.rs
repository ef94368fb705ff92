use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("No residues available for analysis")]
    NoResidues,

    #[error("Residue {index} has a non-finite confidence score")]
    NonFiniteScore { index: isize },

    #[error("Required global metric '{0}' is missing from the summary")]
    MissingMetric(&'static str),
}
