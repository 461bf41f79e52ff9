use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable machine-readable error codes for structured API responses.
///
/// Codes are part of the cross-service contract: they never change when
/// message text is reworded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Document lookup failed
    #[serde(rename = "DOCUMENT_NOT_FOUND")]
    DocumentNotFound,

    /// Document with the same content hash is already notarized
    #[serde(rename = "DOCUMENT_ALREADY_EXISTS")]
    DocumentAlreadyExists,

    /// Not enough gas to submit the transaction
    #[serde(rename = "INSUFFICIENT_GAS")]
    InsufficientGas,

    /// On-chain transaction reverted or was dropped
    #[serde(rename = "TRANSACTION_FAILED")]
    TransactionFailed,

    /// Unknown or unsupported blockchain network
    #[serde(rename = "INVALID_NETWORK")]
    InvalidNetwork,

    /// Upload to off-chain storage failed
    #[serde(rename = "STORAGE_UPLOAD_FAILED")]
    StorageUploadFailed,

    /// Input validation failed
    #[serde(rename = "VALIDATION_ERROR")]
    ValidationError,

    /// Authentication failed
    #[serde(rename = "AUTHENTICATION_FAILED")]
    AuthenticationFailed,

    /// Caller lacks permission for the action
    #[serde(rename = "AUTHORIZATION_FAILED")]
    AuthorizationFailed,

    /// API key lookup failed
    #[serde(rename = "API_KEY_NOT_FOUND")]
    ApiKeyNotFound,

    /// Too many requests / rate limit exceeded
    #[serde(rename = "RATE_LIMIT_EXCEEDED")]
    RateLimitExceeded,

    /// Chain-level failure with no more specific code
    #[serde(rename = "CHAIN_ERROR")]
    ChainError,

    /// Generic fallback for unmodeled failures
    #[serde(rename = "NOTARY_ERROR")]
    NotaryError,
}

/// Coarse grouping of error codes, used for catch-all handling of a family
/// of failures without enumerating every code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Document lookup and uniqueness failures
    Document,
    /// On-chain interaction failures
    Chain,
    /// Off-chain storage failures
    Storage,
    /// Authentication, authorization, and API key failures
    Auth,
    /// Input validation failures
    Validation,
    /// Throttling
    RateLimit,
    /// Anything without a more specific category
    General,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorCode {
    /// Wire representation of this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DocumentNotFound => "DOCUMENT_NOT_FOUND",
            Self::DocumentAlreadyExists => "DOCUMENT_ALREADY_EXISTS",
            Self::InsufficientGas => "INSUFFICIENT_GAS",
            Self::TransactionFailed => "TRANSACTION_FAILED",
            Self::InvalidNetwork => "INVALID_NETWORK",
            Self::StorageUploadFailed => "STORAGE_UPLOAD_FAILED",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::AuthenticationFailed => "AUTHENTICATION_FAILED",
            Self::AuthorizationFailed => "AUTHORIZATION_FAILED",
            Self::ApiKeyNotFound => "API_KEY_NOT_FOUND",
            Self::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            Self::ChainError => "CHAIN_ERROR",
            Self::NotaryError => "NOTARY_ERROR",
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::DocumentNotFound => 404,
            Self::DocumentAlreadyExists => 409,
            Self::InsufficientGas => 502,
            Self::TransactionFailed => 502,
            Self::InvalidNetwork => 400,
            Self::StorageUploadFailed => 502,
            Self::ValidationError => 400,
            Self::AuthenticationFailed => 401,
            Self::AuthorizationFailed => 403,
            Self::ApiKeyNotFound => 401,
            Self::RateLimitExceeded => 429,
            Self::ChainError => 502,
            Self::NotaryError => 500,
        }
    }

    /// Category this code belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DocumentNotFound | Self::DocumentAlreadyExists => ErrorCategory::Document,
            Self::InsufficientGas
            | Self::TransactionFailed
            | Self::InvalidNetwork
            | Self::ChainError => ErrorCategory::Chain,
            Self::StorageUploadFailed => ErrorCategory::Storage,
            Self::AuthenticationFailed | Self::AuthorizationFailed | Self::ApiKeyNotFound => {
                ErrorCategory::Auth
            }
            Self::ValidationError => ErrorCategory::Validation,
            Self::RateLimitExceeded => ErrorCategory::RateLimit,
            Self::NotaryError => ErrorCategory::General,
        }
    }
}
