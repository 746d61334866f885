use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// The data provider could not be reached
    NetworkError(String),
    /// The data provider answered with a non-success status
    ResponseError { status: u16, message: String },
    /// The payload could not be decoded into announcements
    DecodeError(String),
    /// Invalid URL format
    UrlError(String),
    /// Invalid input format
    InvalidInput(String),
    /// IO operation failed
    IoError(String),
}

impl AppError {
    /// Returns the bare message carried by the error, without the category prefix.
    ///
    /// This is the text shown in the dashboard's error banner.
    pub fn message(&self) -> &str {
        match self {
            AppError::NetworkError(msg)
            | AppError::DecodeError(msg)
            | AppError::UrlError(msg)
            | AppError::InvalidInput(msg)
            | AppError::IoError(msg) => msg,
            AppError::ResponseError { message, .. } => message,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NetworkError(msg) => write!(f, "Network error: {msg}"),
            AppError::ResponseError { status, message } => {
                write!(f, "Response error (HTTP {status}): {message}")
            }
            AppError::DecodeError(msg) => write!(f, "Decode error: {msg}"),
            AppError::UrlError(msg) => write!(f, "Invalid URL: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            AppError::IoError(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

// Conversion implementations for common errors
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => AppError::ResponseError {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None if err.is_decode() => AppError::DecodeError(err.to_string()),
            None => AppError::NetworkError(err.to_string()),
        }
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::UrlError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::DecodeError(err.to_string())
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::InvalidInput(format!("Failed to parse config: {err}"))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

// Custom type alias for Results in this application
pub type AppResult<T> = Result<T, AppError>;
