//! Error types for arplace

use thiserror::Error;

/// Main error type for arplace operations
///
/// The placement engine itself never fails: precondition misses and geometric
/// degeneracies are silent no-ops. These variants exist for the collaborator
/// seams, where a host's surface-detection or scene backend can fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Surface detection error: {0}")]
    Surface(String),

    #[error("Scene error: {0}")]
    Scene(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type alias for arplace operations
pub type Result<T> = std::result::Result<T, Error>;
