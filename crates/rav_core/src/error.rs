use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level error type for the document generators.
#[derive(Error, Debug)]
pub enum RavError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Asset error: {0}")]
    Asset(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("File system error: {0}")]
    FileSystem(String),
}

/// Classification of errors for logging and user display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// Invalid or unreadable configuration.
    ConfigError,
    /// A bundled asset (logo image) could not be used.
    AssetError,
    /// The document library refused to serialize the document.
    RenderError,
    /// Output directory or file could not be written.
    SystemError,
}

impl RavError {
    /// Returns the broad error category for routing and display purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Config(_) => ErrorCategory::ConfigError,
            Self::Asset(_) => ErrorCategory::AssetError,
            Self::Render(_) => ErrorCategory::RenderError,
            Self::FileSystem(_) => ErrorCategory::SystemError,
        }
    }

    /// Returns a user-friendly message (hides internal details).
    pub fn user_message(&self) -> String {
        match self {
            Self::Config(msg) => format!("Configuration issue: {msg}"),
            Self::Asset(msg) => format!("Asset problem: {msg}"),
            Self::Render(_) => "The document could not be serialized.".into(),
            Self::FileSystem(msg) => format!("File error: {msg}"),
        }
    }
}

impl From<std::io::Error> for RavError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_mapping() {
        assert_eq!(
            RavError::Config("x".into()).category(),
            ErrorCategory::ConfigError
        );
        assert_eq!(
            RavError::Asset("x".into()).category(),
            ErrorCategory::AssetError
        );
        assert_eq!(
            RavError::Render("x".into()).category(),
            ErrorCategory::RenderError
        );
        assert_eq!(
            RavError::FileSystem("x".into()).category(),
            ErrorCategory::SystemError
        );
    }

    #[test]
    fn test_display_includes_detail() {
        let err = RavError::Config("bad date".into());
        assert_eq!(err.to_string(), "Configuration error: bad date");
    }

    #[test]
    fn test_render_user_message_hides_detail() {
        let err = RavError::Render("zip writer exploded at offset 42".into());
        assert!(!err.user_message().contains("offset 42"));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: RavError = io.into();
        assert_eq!(err.category(), ErrorCategory::SystemError);
        assert!(err.user_message().contains("denied"));
    }
}
