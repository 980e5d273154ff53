// Central Error Type for the Client

use thiserror::Error;

/// Client-level error type
///
/// Decode failure is deliberately absent: unparseable stdout on a zero exit
/// status degrades to `ToolOutput::Raw` instead of failing the call.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    /// The tool ran and exited non-zero. Carries the captured stderr verbatim.
    #[error("External tool failed: {stderr}")]
    ExternalTool { stderr: String },

    /// The tool never ran (spawn failure, e.g. executable not found).
    #[error("Launch error: {0}")]
    Launch(#[from] crate::port::LaunchError),
}

/// Result type alias using ClientError
pub type Result<T> = std::result::Result<T, ClientError>;
