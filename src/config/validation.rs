//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, bind address parseable)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: StubConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use crate::config::schema::StubConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a parsed configuration, collecting every failure.
pub fn validate_config(config: &StubConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError {
            field: "listener.bind_address".to_string(),
            message: format!("not a valid socket address: {:?}", config.listener.bind_address),
        });
    }

    if config.listener.request_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "listener.request_timeout_secs".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    if config.enrichment.processing_delay_secs == 0 {
        errors.push(ValidationError {
            field: "enrichment.processing_delay_secs".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    if config.enrichment.default_variant.is_empty() {
        errors.push(ValidationError {
            field: "enrichment.default_variant".to_string(),
            message: "must not be empty".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_config(&StubConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = StubConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.listener.request_timeout_secs = 0;
        config.enrichment.processing_delay_secs = 0;
        config.enrichment.default_variant = String::new();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[0].field, "listener.bind_address");
    }

    #[test]
    fn test_zero_processing_delay_rejected() {
        let mut config = StubConfig::default();
        config.enrichment.processing_delay_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "enrichment.processing_delay_secs");
    }
}
