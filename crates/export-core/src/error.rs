// File: crates/export-core/src/error.rs
// Summary: Failure taxonomy for the export layer.

use thiserror::Error;

/// Failures this layer can name. Only `SurfaceNotFound` is handled locally
/// (logged, then swallowed); everything else propagates to the host.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("chart surface '{0}' not found")]
    SurfaceNotFound(String),
    #[error("control is missing required attribute '{0}'")]
    MissingAttribute(&'static str),
    #[error("failed to encode projection records")]
    Encode(#[from] serde_json::Error),
    #[error("export href is {len} bytes, above the {max} byte limit")]
    PayloadTooLarge { len: usize, max: usize },
}
