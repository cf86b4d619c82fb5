/// Errors while reading an analysis result.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadError {
    #[error("failed to parse analysis: {0}")]
    ParseError(String),

    #[error("failed to read analysis file: {0}")]
    ReadError(String),

    #[error("analysis contains no steps")]
    NoSteps,
}
