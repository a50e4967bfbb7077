use thiserror::Error;

/// Errors raised by the toolkit.
///
/// A user answering "no" at the confirmation prompt is not represented here;
/// that is a normal pipeline outcome (`PipelineOutcome::Cancelled`).
#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),
    /// Network failure, timeout, or a non-2xx status from either server.
    #[error("{message}")]
    Transport {
        status: Option<u16>,
        message: String,
    },
    /// A response arrived but lacks a field or shape the caller depends on.
    #[error("Unexpected response: {0}")]
    Semantic(String),
    #[error("{0}")]
    Validation(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ToolkitError {
    /// The HTTP status carried by a transport error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ToolkitError::Transport { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ToolkitError {
    fn from(err: reqwest::Error) -> Self {
        ToolkitError::Transport {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}
