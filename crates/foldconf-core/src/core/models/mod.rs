//! Data models for a single predicted structure.

pub mod metrics;
pub mod region;
pub mod residue;
pub mod target;
