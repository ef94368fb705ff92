//! # Core Module
//!
//! Fundamental building blocks shared by every stage of the confidence analysis.
//!
//! - **Data Models** ([`models`]) - Residue records, global metrics, regions and the target profile
//! - **File I/O** ([`io`]) - Readers for the coordinate file and the summary metrics file
//! - **Statistics** ([`stats`]) - Descriptive statistics and residue range compression
//!
//! Everything in this module is constructed once per run and never mutated afterwards.

pub mod io;
pub mod models;
pub mod stats;
