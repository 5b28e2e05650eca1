//! Error Types

use thiserror::Error;

use crate::lead::LeadField;

/// Result type alias for site operations
pub type Result<T> = std::result::Result<T, SiteError>;

/// Site error types
#[derive(Error, Debug)]
pub enum SiteError {
    /// A required form field was left empty
    #[error("Missing required field: {0}")]
    Missing(LeadField),

    /// Email does not match the address grammar
    #[error("Invalid email address: {0:?}")]
    InvalidEmail(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme token could not be parsed
    #[error("Theme error: {0}")]
    Theme(String),

    /// Lead sink rejected the submission
    #[error("Lead sink error: {0}")]
    Sink(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SiteError {
    /// Errors the browser would have caught before `submit` fired
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Missing(_) | Self::InvalidEmail(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_classification() {
        assert!(SiteError::Missing(LeadField::Name).is_validation());
        assert!(SiteError::InvalidEmail("nope".into()).is_validation());
        assert!(!SiteError::Sink("down".into()).is_validation());
        assert!(!SiteError::Config("bad url".into()).is_validation());
    }

    #[test]
    fn test_missing_names_field() {
        let msg = SiteError::Missing(LeadField::Whatsapp).to_string();
        assert_eq!(msg, "Missing required field: WhatsApp Number");
    }
}
