//! CLI library components for the composite-table inspector.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
