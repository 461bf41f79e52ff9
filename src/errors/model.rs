use serde_json::{json, Map, Value};

use super::codes::{ErrorCategory, ErrorCode};
use super::response::ErrorResponse;

/// Domain failures for the notary platform.
///
/// A closed tagged union: every variant fixes its machine-readable code and
/// the key set of its `details` payload, so the wire format stays stable no
/// matter where the error is raised. Instances are plain immutable values —
/// construct one at the point of failure, propagate it with `?`, and let the
/// boundary serialize it.
///
/// Coarse handling matches on [`category`](Self::category) instead of
/// enumerating variants:
///
/// ```
/// use notary_utils::errors::{ErrorCategory, NotaryError};
///
/// let err = NotaryError::TransactionFailed {
///     transaction_hash: "0xabc".into(),
///     reason: None,
/// };
/// assert_eq!(err.category(), ErrorCategory::Chain);
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NotaryError {
    #[error("Document not found: {document_id}")]
    DocumentNotFound { document_id: String },

    #[error("Document with hash {file_hash} already exists")]
    DocumentAlreadyExists { file_hash: String },

    #[error("Insufficient gas: required {required_gas}, available {available_gas}")]
    InsufficientGas { required_gas: u64, available_gas: u64 },

    #[error("Transaction failed: {transaction_hash}")]
    TransactionFailed {
        transaction_hash: String,
        reason: Option<String>,
    },

    #[error("Invalid network: {network}")]
    InvalidNetwork {
        network: String,
        supported_networks: Vec<String>,
    },

    #[error("Failed to upload {file_name} to storage")]
    StorageUploadFailed {
        file_name: String,
        reason: Option<String>,
    },

    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("{reason}")]
    Authentication { reason: String },

    #[error("{}", authorization_message(.action, .resource))]
    Authorization {
        action: String,
        resource: Option<String>,
    },

    #[error("{}", api_key_message(.key_prefix))]
    ApiKeyNotFound { key_prefix: Option<String> },

    #[error("Rate limit exceeded")]
    RateLimited { retry_after_seconds: Option<u64> },

    /// Chain-level failure with no more specific variant. Directly
    /// constructible so callers can report on-chain problems the leaf
    /// variants do not model.
    #[error("{message}")]
    Chain {
        message: String,
        details: Map<String, Value>,
    },

    /// Generic fallback. Wraps unmodeled failures so raw internal error text
    /// never crosses an API boundary; an explicit `code` overrides the
    /// default `NOTARY_ERROR`.
    #[error("{message}")]
    Other {
        message: String,
        code: Option<String>,
        details: Map<String, Value>,
    },
}

fn authorization_message(action: &str, resource: &Option<String>) -> String {
    match resource {
        Some(resource) => format!("Not authorized to {action} {resource}"),
        None => format!("Not authorized to {action}"),
    }
}

fn api_key_message(key_prefix: &Option<String>) -> String {
    match key_prefix {
        Some(prefix) => format!("API key not found: {prefix}"),
        None => "API key not found".to_string(),
    }
}

impl NotaryError {
    /// Generic error with the default code and no details.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
            code: None,
            details: Map::new(),
        }
    }

    /// Generic error with an explicit code and details.
    pub fn with_code(
        message: impl Into<String>,
        code: impl Into<String>,
        details: Map<String, Value>,
    ) -> Self {
        Self::Other {
            message: message.into(),
            code: Some(code.into()),
            details,
        }
    }

    /// Chain-category error with no details.
    pub fn chain(message: impl Into<String>) -> Self {
        Self::Chain {
            message: message.into(),
            details: Map::new(),
        }
    }

    /// Chain-category error carrying structured context.
    pub fn chain_with_details(message: impl Into<String>, details: Map<String, Value>) -> Self {
        Self::Chain {
            message: message.into(),
            details,
        }
    }

    /// Authentication failure with the generic reason.
    pub fn invalid_credentials() -> Self {
        Self::Authentication {
            reason: "Invalid credentials".to_string(),
        }
    }

    /// Stable code for this variant.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::DocumentNotFound { .. } => ErrorCode::DocumentNotFound,
            Self::DocumentAlreadyExists { .. } => ErrorCode::DocumentAlreadyExists,
            Self::InsufficientGas { .. } => ErrorCode::InsufficientGas,
            Self::TransactionFailed { .. } => ErrorCode::TransactionFailed,
            Self::InvalidNetwork { .. } => ErrorCode::InvalidNetwork,
            Self::StorageUploadFailed { .. } => ErrorCode::StorageUploadFailed,
            Self::Validation { .. } => ErrorCode::ValidationError,
            Self::Authentication { .. } => ErrorCode::AuthenticationFailed,
            Self::Authorization { .. } => ErrorCode::AuthorizationFailed,
            Self::ApiKeyNotFound { .. } => ErrorCode::ApiKeyNotFound,
            Self::RateLimited { .. } => ErrorCode::RateLimitExceeded,
            Self::Chain { .. } => ErrorCode::ChainError,
            Self::Other { .. } => ErrorCode::NotaryError,
        }
    }

    /// Wire code string; an explicit code on `Other` overrides the default.
    pub fn code_str(&self) -> &str {
        match self {
            Self::Other {
                code: Some(code), ..
            } => code,
            _ => self.code().as_str(),
        }
    }

    /// Category for coarse-grained handling.
    pub fn category(&self) -> ErrorCategory {
        self.code().category()
    }

    /// Structured context for this error. Keys are fixed per variant; absent
    /// optional context serializes as explicit `null`.
    pub fn details(&self) -> Map<String, Value> {
        let mut details = Map::new();
        match self {
            Self::DocumentNotFound { document_id } => {
                details.insert("document_id".to_string(), json!(document_id));
            }
            Self::DocumentAlreadyExists { file_hash } => {
                details.insert("file_hash".to_string(), json!(file_hash));
            }
            Self::InsufficientGas {
                required_gas,
                available_gas,
            } => {
                details.insert("required_gas".to_string(), json!(required_gas));
                details.insert("available_gas".to_string(), json!(available_gas));
            }
            Self::TransactionFailed {
                transaction_hash,
                reason,
            } => {
                details.insert("transaction_hash".to_string(), json!(transaction_hash));
                details.insert("reason".to_string(), json!(reason));
            }
            Self::InvalidNetwork {
                network,
                supported_networks,
            } => {
                details.insert("network".to_string(), json!(network));
                details.insert("supported_networks".to_string(), json!(supported_networks));
            }
            Self::StorageUploadFailed { file_name, reason } => {
                details.insert("file_name".to_string(), json!(file_name));
                details.insert("reason".to_string(), json!(reason));
            }
            Self::Validation { field, reason } => {
                details.insert("field".to_string(), json!(field));
                details.insert("reason".to_string(), json!(reason));
            }
            Self::Authentication { .. } => {}
            Self::Authorization { action, resource } => {
                details.insert("action".to_string(), json!(action));
                details.insert("resource".to_string(), json!(resource));
            }
            Self::ApiKeyNotFound { key_prefix } => {
                details.insert("key_prefix".to_string(), json!(key_prefix));
            }
            Self::RateLimited {
                retry_after_seconds,
            } => {
                details.insert("retry_after_seconds".to_string(), json!(retry_after_seconds));
            }
            Self::Chain { details: d, .. } | Self::Other { details: d, .. } => {
                return d.clone();
            }
        }
        details
    }

    /// Serialize into the `{error, message, details}` wire body.
    ///
    /// Deterministic and infallible; safe to call any number of times.
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse::new(self.code_str(), self.to_string(), self.details())
    }
}
