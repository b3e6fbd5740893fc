//! SAML error types.
//!
//! Parameter bundles and request serialisation never fail. Errors come from
//! loading settings and from the transport bindings.

use thiserror::Error;

/// Result type for SAML operations.
pub type SamlResult<T> = Result<T, SamlError>;

/// SAML service provider errors.
#[derive(Debug, Error)]
pub enum SamlError {
    /// Settings could not be parsed or failed validation.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Settings file could not be read.
    #[error("I/O error: {0}")]
    Io(String),

    /// Deflate compression error.
    #[error("deflate error: {0}")]
    Deflate(String),
}

impl SamlError {
    /// Returns whether the error stems from the SP configuration.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidSettings(_) | Self::Io(_))
    }
}

impl From<toml::de::Error> for SamlError {
    fn from(err: toml::de::Error) -> Self {
        Self::InvalidSettings(err.to_string())
    }
}

impl From<std::io::Error> for SamlError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = SamlError::InvalidSettings("sp.entity_id is empty".to_string());
        assert_eq!(err.to_string(), "invalid settings: sp.entity_id is empty");
        assert!(err.is_configuration());

        let err = SamlError::Deflate("boom".to_string());
        assert!(!err.is_configuration());
    }

    #[test]
    fn io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = SamlError::from(io);
        assert!(matches!(err, SamlError::Io(_)));
    }
}
