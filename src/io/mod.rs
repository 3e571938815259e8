//! Input/output, configuration, diagnostics and the command-line front end

/// Command-line arguments and the run orchestrator
pub mod cli;
/// Constants and validated run settings
pub mod configuration;
/// Error types
pub mod error;
/// Directory scanning, output naming and quilt export
pub mod image;
/// Progress display over series
pub mod progress;
/// Injected diagnostic event reporting
pub mod report;
