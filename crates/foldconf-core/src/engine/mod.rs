//! # Engine Module
//!
//! Aggregates extracted residues and global metrics into an [`analysis::Analysis`].
//!
//! - **Analysis** ([`analysis`]) - Overall statistics, confidence bands, regional and epitope breakdowns
//! - **Progress Monitoring** ([`progress`]) - Phase reporting for front-ends
//! - **Error Handling** ([`error`]) - Analysis-specific error types

pub mod analysis;
pub mod error;
pub mod progress;
