//! CLI library components for case search and export.

pub mod logging;
pub mod summary;
