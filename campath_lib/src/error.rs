/*
    campath_lib
    Author: campath contributors
    Date: 2026-10-19
*/

use thiserror::Error;

/// Error of path generation, ray casting or scene parsing.
///
/// Errors are raised before any output is produced, there is no partial result.
#[derive(Error, Debug)]
pub enum CamPathError {
    /// Input rejected before computation started
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// Vector of (near) zero length or non-finite value met during computation
    #[error("numeric degeneracy: {0}")]
    NumericDegeneracy(String),
    /// Scene document has valid JSON syntax, but wrong shape
    #[error("malformed scene description: {0}")]
    SceneFormat(String),
    #[error("scene json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CamPathError>;

pub(crate) fn invalid(msg: impl Into<String>) -> CamPathError {
    CamPathError::InvalidConfiguration(msg.into())
}
