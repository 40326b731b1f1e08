//! Common error types for paw-platform.

use thiserror::Error;

/// Platform-level errors.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("invalid process id: {0}")]
    InvalidPid(#[from] paw_core::InvalidPid),
}

/// Result type for platform operations.
pub type PlatformResult<T> = Result<T, PlatformError>;
