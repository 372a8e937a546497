use thiserror::Error;

/// Main error type for greeting
#[derive(Debug, Error)]
pub enum GreetingError {
    /// Language tag is not a recognized member of the enumeration
    #[error("Unknown language tag: {tag}")]
    UnknownLanguage { tag: String },
}

impl GreetingError {
    /// Create an unknown language error
    pub fn unknown_language(tag: impl Into<String>) -> Self {
        GreetingError::UnknownLanguage { tag: tag.into() }
    }
}

/// Result type alias for greeting operations
pub type Result<T> = std::result::Result<T, GreetingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GreetingError::unknown_language("fr");
        assert!(err.to_string().contains("fr"));
        assert!(matches!(err, GreetingError::UnknownLanguage { .. }));
    }

    #[test]
    fn test_error_creation_helper() {
        let err = GreetingError::unknown_language("de");
        assert!(matches!(err, GreetingError::UnknownLanguage { tag } if tag == "de"));
    }
}
