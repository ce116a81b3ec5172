//! Report output for a license check.
//!
//! - [`terminal`] — colored console report: inventory dump, warnings banner,
//!   and the final error/success banner; `--verbose` adds a verdict table.
//! - [`result_file`] — structured YAML result document read by CI.

pub mod result_file;
pub mod terminal;
