use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Could not serialize report: {0}")]
    Report(#[from] serde_json::Error),

    #[error(transparent)]
    Imglogic(#[from] imglogic::Error),
}
