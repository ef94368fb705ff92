//! # foldconf Core Library
//!
//! Per-residue confidence analysis for predicted protein structures. The library reads a
//! predicted model (mmCIF with pLDDT stored in the B-factor column) together with its
//! summary-confidence metrics, computes descriptive statistics and renders a plain-text
//! report and an optional chart.
//!
//! ## Architectural Philosophy
//!
//! The library keeps the same layered split throughout:
//!
//! - **[`core`]: The Foundation.** Immutable data models (`ResidueRecord`, `GlobalMetrics`,
//!   `RegionLayout`), file readers and the pure statistics primitives.
//!
//! - **[`engine`]: The Logic Core.** Turns residues and metrics into an [`engine::analysis::Analysis`]:
//!   confidence bands, regional breakdowns and epitope statistics. Also hosts progress reporting.
//!
//! - **[`report`] and [`plot`]: The Renderers.** Format an analysis as an ASCII text report and,
//!   when the `plot` feature is enabled, as a two-panel PNG chart.
//!
//! - **[`workflows`]: The Public API.** Runs the whole parse, aggregate and format pipeline
//!   from two input paths.

pub mod core;
pub mod engine;
pub mod plot;
pub mod report;
pub mod workflows;
