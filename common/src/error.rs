//! Error taxonomy for a run.
//!
//! Resolution errors abort a run before any provider call is made. Provider
//! errors are wrapped into the experiment result by the executor and surfaced
//! to the operator; they never abort the process on their own.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Target resolution failed; the run is aborted fail-closed.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("provisioning-output file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("no line in {path} contains key '{key}'")]
    KeyNotFound { path: PathBuf, key: String },

    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A provider call failed. Single attempt, never retried.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider processed the request and refused it (conflict, bad
    /// input, missing resource). Carries whatever detail the provider gave.
    #[error("provider rejected the request: {0}")]
    Rejected(String),

    /// The provider could not be reached or answered with garbage.
    #[error("provider unavailable: {0}")]
    Unavailable(String),
}
