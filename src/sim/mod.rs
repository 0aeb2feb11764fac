pub mod engine;
pub mod kpi;
/// Flat-profile layout search.
pub mod optimize;
/// Light source angle stepper.
pub mod sweep;
pub mod types;
