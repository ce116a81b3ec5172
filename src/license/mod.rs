//! License classification against the loaded allow-list.
//!
//! - [`classifier`] — single-license check, per-artifact verdicts (including
//!   multi-license artifacts) and whole-inventory evaluation.

pub mod classifier;
