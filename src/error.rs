use thiserror::Error;

/// Errors from talking to the profile submitter.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubmitError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

/// Errors surfaced by the form controller.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormError {
    #[error("Unknown form field: {0}")]
    UnknownField(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid latency in {var}: {value}")]
    InvalidLatency { var: &'static str, value: String },
    #[error("Unknown phone digit policy: {0} (expected strip-all or strip-first)")]
    UnknownPhonePolicy(String),
}
