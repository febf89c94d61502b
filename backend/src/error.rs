use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by the SDL backend. Every variant carries SDL's own
/// diagnostic string.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("{subsystem} initialization error: {message}")]
    Init {
        subsystem: &'static str,
        message: String,
    },
    #[error("error while building window: {0}")]
    Window(String),
    #[error("error while building canvas: {0}")]
    Canvas(String),
    #[error("loading {path:?} error: {message}")]
    Asset { path: PathBuf, message: String },
    #[error("render error: {0}")]
    Render(String),
    #[error("audio error: {0}")]
    Audio(String),
}

impl BackendError {
    pub(crate) fn init(subsystem: &'static str, message: impl ToString) -> Self {
        BackendError::Init {
            subsystem,
            message: message.to_string(),
        }
    }

    pub fn asset(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        BackendError::Asset {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BackendError>;
