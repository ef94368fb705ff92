//! Provides readers for the two files a structure prediction emits.
//!
//! - [`cif`] extracts one confidence value per residue from the mmCIF `_atom_site` loop.
//! - [`summary`] loads the whole-structure quality metrics from the summary JSON.
//!
//! Both implement the [`traits::PredictionFile`] interface.

pub mod cif;
pub mod summary;
pub mod traits;
