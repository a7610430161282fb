//! Error types for the generation pipeline
//!
//! Per-file extraction failures are recovered locally (the candidate is
//! dropped and the run continues); artifact-level failures are fatal and
//! surfaced to the invoker.

use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting metadata from one candidate file
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The candidate file could not be read
    #[error("Failed to read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An alias tag was found but no class name could be derived from the
    /// documented declaration
    #[error("Malformed metadata in {path}: alias '{alias}' has no class name")]
    MissingClassName { path: PathBuf, alias: String },
}

/// Errors that can occur while writing the generated module
#[derive(Debug, Error)]
pub enum EmitError {
    /// The output directory does not exist or is not writable
    #[error("Failed to stage output in {dir}: {source}")]
    Stage {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the staged module content failed
    #[error("Failed to write generated module: {0}")]
    Write(#[source] std::io::Error),

    /// Atomically replacing the previous artifact failed
    #[error("Failed to replace {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level errors for one generation run
#[derive(Debug, Error)]
pub enum GenerateError {
    /// No service-bearing candidate was found for the profile; a skeleton
    /// artifact was still written
    #[error("No services found for profile '{profile}'")]
    NoServicesFound { profile: String },

    /// The output artifact could not be written
    #[error(transparent)]
    Emit(#[from] EmitError),

    /// The configuration was invalid
    #[error(transparent)]
    Config(#[from] ConfigError),
}
