//! Error types for generation and export operations

use std::fmt;
use std::path::PathBuf;

use crate::geometry::Orientation;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// Generation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// No line position satisfied the spacing constraint
    ///
    /// Occurs when rejection sampling exhausts its attempt budget, which
    /// means the canvas is too small for the requested line count at the
    /// configured spacing.
    LinePlacement {
        /// Orientation of the line being placed
        orientation: Orientation,
        /// Attempts made before giving up
        attempts: usize,
    },

    /// Too few perpendicular anchors to span a new line
    AnchorSelection {
        /// Orientation of the line being placed
        orientation: Orientation,
        /// Fixed coordinate chosen for the line
        position: i32,
        /// Number of crossing anchor lines available
        available: usize,
    },

    /// Failed to save a rendered picture to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::LinePlacement {
                orientation,
                attempts,
            } => {
                write!(
                    f,
                    "Cannot place {orientation} line under spacing constraints after {attempts} attempts"
                )
            }
            Self::AnchorSelection {
                orientation,
                position,
                available,
            } => {
                write!(
                    f,
                    "Cannot span {orientation} line at {position}: {available} perpendicular anchors available, need 2 distinct"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export picture to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
