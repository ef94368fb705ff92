//! Descriptive statistics and range compression over residue data.

pub mod descriptive;
pub mod ranges;
