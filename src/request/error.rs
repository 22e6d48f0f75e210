use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with status {status}")]
    HttpStatus { status: u16 },

    #[error("Could not read search results: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    HttpStatus,
    Parse,
}

/// User-facing description of a failed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&FetchError> for ErrorInfo {
    fn from(err: &FetchError) -> Self {
        let (kind, message) = match err {
            FetchError::Network(_) => (
                ErrorKind::Network,
                "Could not reach the lyrics service. Check your connection and try again."
                    .to_string(),
            ),
            FetchError::HttpStatus { status } => (
                ErrorKind::HttpStatus,
                format!("The lyrics service returned an error (HTTP {}).", status),
            ),
            FetchError::Parse(_) => (
                ErrorKind::Parse,
                "The lyrics service sent a response that could not be read.".to_string(),
            ),
        };
        Self { kind, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_each_failure() {
        let info = ErrorInfo::from(&FetchError::HttpStatus { status: 500 });
        assert_eq!(info.kind, ErrorKind::HttpStatus);
        assert!(info.message.contains("500"));

        let info = ErrorInfo::from(&FetchError::Network("refused".into()));
        assert_eq!(info.kind, ErrorKind::Network);

        let info = ErrorInfo::from(&FetchError::Parse("eof".into()));
        assert_eq!(info.kind, ErrorKind::Parse);
    }
}
