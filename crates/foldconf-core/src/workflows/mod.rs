//! # Workflows Module
//!
//! High-level entry points that run the complete pipeline.
//!
//! - **Analyze Workflow** ([`analyze`]) - Reads the coordinate and summary files, computes the
//!   analysis, writes the ASCII report and renders the optional chart.

pub mod analyze;
