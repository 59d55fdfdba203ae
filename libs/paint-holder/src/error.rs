//! # Builder Errors
//!
//! Error types for the paint holder builder.
//!
//! ## Error Policy
//!
//! - Geometry is never checked numerically; degenerate shapes are emitted as is
//! - Unknown direction tokens fail instead of defaulting
//! - Runtime configuration (presets, JSON files, CLI flags) is validated up front

use thiserror::Error;

/// Errors that can occur while configuring or building a holder.
#[derive(Debug, Error)]
pub enum HolderError {
    /// Direction token outside N, S, E, W, U, D, R, L.
    #[error("Invalid direction: {0:?} (expected one of N, S, E, W, U, D, R, L)")]
    InvalidDirection(String),

    /// Configuration value that cannot produce a holder.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Preset name that is not known.
    #[error("Unknown preset: {0} (expected citadel, standard or tamiya)")]
    UnknownPreset(String),

    /// Malformed command line.
    #[error("Usage error: {0}")]
    Usage(String),

    /// Reading a configuration file or writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid JSON for a configuration.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for builder operations.
pub type Result<T> = std::result::Result<T, HolderError>;

// =============================================================================
// TESTS
// =============================================================================
