//! Ways a deployment attempt can end badly.

use thiserror::Error;

/// Result type alias for a deployment attempt.
pub type DeployResult<T = ()> = Result<T, DeployError>;

/// The three terminal failures of a run. Exactly one applies per failed run.
#[derive(Error, Debug)]
pub enum DeployError {
    /// Neither `PATH` nor the local install produced the tool
    #[error("'{tool}' CLI not found!")]
    ToolNotFound { tool: String },

    /// The tool ran and reported failure
    #[error("Deployment failed with exit code {code}")]
    NonZeroExit { code: i32 },

    /// Spawning or waiting failed for some other reason
    #[error("An unexpected error occurred: {0}")]
    Unexpected(#[from] std::io::Error),
}
