//! Solar plant output as a function of sun angle.

pub mod config;
/// Sweep export.
pub mod io;
pub mod model;
/// Diagnostic reporting sinks.
pub mod report;
/// Sweep driver, profile metrics and layout search.
pub mod sim;
#[cfg(feature = "tui")]
pub mod tui;
