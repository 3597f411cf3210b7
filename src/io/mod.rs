//! Input/output operations and error handling

/// Command-line interface and batch orchestration
pub mod cli;
/// Policy constants and runtime configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Raster rendering and PNG export
pub mod image;
/// Batch progress reporting
pub mod progress;
