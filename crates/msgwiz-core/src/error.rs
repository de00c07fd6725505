//! Error types for the MSGWIZ wizard.

use serde::Serialize;
use thiserror::Error;

/// A shared error type for the whole wizard.
///
/// Store operations are infallible apart from the opt-in checked patch; the
/// remaining variants come from collaborators (config files, catalogs,
/// generation backends, customer services).
#[derive(Error, Debug, Clone, Serialize)]
pub enum WizardError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generation pipeline failure (profile sync or message generation)
    #[error("Backend error: {0}")]
    Backend(String),

    /// A simulation value outside the active persona's allow-list
    #[error("Option '{value}' is not allowed for {attribute}")]
    OptionNotAllowed {
        attribute: &'static str,
        value: String,
    },
}

impl WizardError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Backend error
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }

    /// Creates an OptionNotAllowed error
    pub fn option_not_allowed(attribute: &'static str, value: impl Into<String>) -> Self {
        Self::OptionNotAllowed {
            attribute,
            value: value.into(),
        }
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a backend error
    pub fn is_backend(&self) -> bool {
        matches!(self, Self::Backend(_))
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is an allow-list violation
    pub fn is_option_not_allowed(&self) -> bool {
        matches!(self, Self::OptionNotAllowed { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for WizardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<toml::de::Error> for WizardError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, WizardError>`.
pub type Result<T> = std::result::Result<T, WizardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion_keeps_kind() {
        let err: WizardError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml").into();
        match err {
            WizardError::Io { message } => assert!(message.contains("NotFound")),
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_toml_error_is_serialization() {
        let err: WizardError = toml::from_str::<toml::Value>("= nope").unwrap_err().into();
        assert!(matches!(err, WizardError::Serialization { ref format, .. } if format == "TOML"));
    }

    #[test]
    fn test_option_not_allowed_message() {
        let err = WizardError::option_not_allowed("preferred_tone", "Bold");
        assert!(err.is_option_not_allowed());
        assert_eq!(err.to_string(), "Option 'Bold' is not allowed for preferred_tone");
    }
}
