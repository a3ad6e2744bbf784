use thiserror::Error;

/// Input rejected by one of the formatting helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("inbound parameter [{input}] does not contain 10 numeric digits (found {digit_count})")]
    WrongDigitCount { input: String, digit_count: usize },
}

#[derive(Error, Debug)]
pub enum UtilError {
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Response build error: {0}")]
    Response(#[from] axum::http::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("{context}; see: {source}")]
    Encode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Encoding,
    Network,
    System,
}

impl UtilError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            UtilError::Validation(_) | UtilError::Config { .. } => ErrorCategory::Input,
            UtilError::Json(_) | UtilError::Encode { .. } => ErrorCategory::Encoding,
            UtilError::Http(_) => ErrorCategory::Network,
            UtilError::Response(_) | UtilError::Io(_) => ErrorCategory::System,
        }
    }

    /// Whether the caller supplied the bad value (as opposed to the environment failing).
    pub fn is_client_error(&self) -> bool {
        match self {
            UtilError::Json(e) => !e.is_io(),
            _ => self.category() == ErrorCategory::Input,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            UtilError::Validation(ValidationError::WrongDigitCount { input, digit_count }) => {
                format!(
                    "'{}' is not a US phone number: expected 10 digits, found {}",
                    input, digit_count
                )
            }
            UtilError::Json(e) => format!("Invalid JSON at line {}, column {}", e.line(), e.column()),
            UtilError::Config { message } => format!("Invalid configuration: {}", message),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, UtilError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_digit_count_message_keeps_input() {
        let err = ValidationError::WrongDigitCount {
            input: "555-1234".to_string(),
            digit_count: 7,
        };
        assert_eq!(
            err.to_string(),
            "inbound parameter [555-1234] does not contain 10 numeric digits (found 7)"
        );
    }

    #[test]
    fn test_category() {
        let err: UtilError = ValidationError::WrongDigitCount {
            input: String::new(),
            digit_count: 0,
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Input);
        assert!(err.is_client_error());

        let err: UtilError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert_eq!(err.category(), ErrorCategory::Encoding);
        assert!(err.is_client_error());
        assert!(err.user_friendly_message().starts_with("Invalid JSON at line 1"));
    }
}
