use derive_more::Display;

/// Coarse error classification callers can branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ErrorKind {
    #[display(fmt = "InvalidArgument")]
    InvalidArgument,
    #[display(fmt = "PreconditionFailed")]
    PreconditionFailed,
    #[display(fmt = "Rendering")]
    Rendering,
    #[display(fmt = "Configuration")]
    Configuration,
}

/// Simplified error system shared by every layer
#[derive(Debug, Clone, PartialEq, Display)]
pub enum AppError {
    /// Bad bar count, start price or moving-average window
    #[display(fmt = "Invalid argument: {}", _0)]
    InvalidArgument(String),
    /// Drawing surface missing or without area; nothing was painted
    #[display(fmt = "Precondition failed: {}", _0)]
    PreconditionFailed(String),
    /// The drawing backend itself refused a primitive
    #[display(fmt = "Rendering error: {}", _0)]
    Rendering(String),
    #[display(fmt = "Configuration error: {}", _0)]
    Configuration(String),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            AppError::PreconditionFailed(_) => ErrorKind::PreconditionFailed,
            AppError::Rendering(_) => ErrorKind::Rendering,
            AppError::Configuration(_) => ErrorKind::Configuration,
        }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        AppError::InvalidArgument(msg.into())
    }

    pub fn precondition_failed(msg: impl Into<String>) -> Self {
        AppError::PreconditionFailed(msg.into())
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Configuration(error.to_string())
    }
}

// Simple convenience type aliases
pub type DomainResult<T> = Result<T, AppError>;
pub type RenderingResult<T> = Result<T, AppError>;
