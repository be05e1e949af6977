//! Boundary-failure error type.
//!
//! Per the error handling design: I/O and malformed input are boundary
//! failures and abort the run. Routing infeasibilities are never
//! represented here — they live in [`crate::model::Solution`]'s
//! unrouted-reason map instead.

use std::path::PathBuf;

/// A boundary failure: something that aborts the run with a diagnostic.
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// The input or output file could not be read or written.
    #[error("cannot open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input document is not well-formed JSON or is missing a
    /// required field.
    #[error("failed to parse input: {0}")]
    Parse(#[from] serde_json::Error),

    /// The output document could not be serialized or written.
    #[error("failed to write output {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
