//! Input/output: command line, reporting, tile export and errors

/// Command-line arguments and run orchestration
pub mod cli;
/// Fixed constants for spacing, file naming and progress display
pub mod configuration;
/// Error type shared by the whole crate
pub mod error;
/// Progress display while tiles are written
pub mod progress;
/// Plain-text geometry report
pub mod report;
/// Cropping and saving individual tiles
pub mod slicer;
