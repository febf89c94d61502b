pub mod assets;
pub mod cli;
pub mod config;
pub mod frame;
pub mod state;

use backend::BackendError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// Bad command line; the message starts with the usage line.
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl GameError {
    /// `program` is the name the process was invoked as.
    pub fn usage(program: &str, cause: clap::Error) -> Self {
        GameError::Usage(format!(
            "Usage: {program} WxH\n{}",
            cause.to_string().trim_end()
        ))
    }

    /// Every failure ends the process with status 1.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn malformed_size_is_a_usage_error() {
        for arg in ["abc", "100", "100x", ""] {
            let cause = cli::Cli::try_parse_from(["./target/debug/game", arg]).unwrap_err();
            let err = GameError::usage("./target/debug/game", cause);
            assert!(matches!(err, GameError::Usage(_)));
            assert!(err.to_string().starts_with("Usage: ./target/debug/game WxH\n"));
            assert_eq!(err.exit_code(), 1);
        }
    }

    #[test]
    fn backend_errors_exit_with_one() {
        let err = GameError::from(BackendError::Render("boom".to_string()));
        assert_eq!(err.to_string(), "render error: boom");
        assert_eq!(err.exit_code(), 1);
    }
}
