//! Construction-time configuration errors.
//!
//! Validation outcomes are never errors: a failing rule adds a
//! [`Message`](crate::Message) to the collection. The only fallible path is
//! building a validator from bad configuration, which is reported here so
//! that it surfaces once, before the validator is reused.

/// Error raised while building a validator.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The regular expression supplied to a pattern rule does not compile.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// Pattern as supplied by the caller.
        pattern: String,
        /// Compilation failure reported by the regex engine.
        source: regex::Error,
    },

    /// A length rule was configured with `min > max`.
    #[error("minimum length {min} exceeds maximum length {max}")]
    InvertedBounds {
        /// Inclusive lower bound.
        min: usize,
        /// Inclusive upper bound.
        max: usize,
    },
}

impl ConfigError {
    /// Convenience constructor for [`ConfigError::InvalidPattern`].
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Convenience constructor for [`ConfigError::InvertedBounds`].
    pub fn inverted_bounds(min: usize, max: usize) -> Self {
        Self::InvertedBounds { min, max }
    }
}

/// Result of building a validator.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn inverted_bounds_display() {
        let err = ConfigError::inverted_bounds(10, 5);
        assert_eq!(err.to_string(), "minimum length 10 exceeds maximum length 5");
    }

    #[test]
    fn invalid_pattern_keeps_source() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = ConfigError::invalid_pattern("(", source);
        match &err {
            ConfigError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "("),
            other => panic!("expected InvalidPattern, got {other:?}"),
        }
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("invalid pattern `(`"));
    }
}
