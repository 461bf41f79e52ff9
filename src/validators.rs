//! Input validation utilities.
//!
//! Each check comes in a fallible form (`validate_*`) that produces a
//! [`NotaryError::Validation`] with `{field, reason}` details, and — where a
//! boolean answer is useful — a pure predicate form (`is_valid_*`).
//! Hash and address validators are strict: the `0x` prefix is required.

use serde_json::{Map, Value};
use std::path::Path;

use crate::constants::{extension_to_mime, MAX_FILE_SIZE, SUPPORTED_FILE_TYPES};
use crate::errors::NotaryError;

fn validation_error(field: &str, reason: impl Into<String>) -> NotaryError {
    NotaryError::Validation {
        field: field.to_string(),
        reason: reason.into(),
    }
}

/// Check email shape: `local@domain.tld` with an alphabetic TLD of at
/// least two characters.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty()
        || !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c))
    {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    if host.is_empty()
        || !host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return false;
    }
    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), NotaryError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(validation_error(
            "email",
            format!("Invalid email format: {email}"),
        ))
    }
}

/// Check a file's type by declared MIME type, or by extension when no MIME
/// type is given.
pub fn is_valid_file_type(file_name: &str, mime_type: Option<&str>) -> bool {
    if let Some(mime) = mime_type {
        return SUPPORTED_FILE_TYPES.contains(&mime);
    }
    file_extension(file_name)
        .and_then(|ext| extension_to_mime(&ext))
        .map(|mime| SUPPORTED_FILE_TYPES.contains(&mime))
        .unwrap_or(false)
}

/// Validate file type based on extension or MIME type
pub fn validate_file_type(file_name: &str, mime_type: Option<&str>) -> Result<(), NotaryError> {
    if is_valid_file_type(file_name, mime_type) {
        return Ok(());
    }
    let reason = match mime_type {
        Some(mime) => format!(
            "Unsupported MIME type: {mime}. Supported: {}",
            SUPPORTED_FILE_TYPES.join(", ")
        ),
        None => format!(
            "Unsupported file extension: {}",
            file_extension(file_name).unwrap_or_default()
        ),
    };
    Err(validation_error("file_type", reason))
}

fn file_extension(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

/// Check a file size against the configured ceiling.
pub fn is_valid_file_size(file_size: u64) -> bool {
    file_size <= MAX_FILE_SIZE
}

/// Validate file size against the configured ceiling
pub fn validate_file_size(file_size: u64) -> Result<(), NotaryError> {
    if is_valid_file_size(file_size) {
        Ok(())
    } else {
        let max_mb = MAX_FILE_SIZE as f64 / (1024.0 * 1024.0);
        let actual_mb = file_size as f64 / (1024.0 * 1024.0);
        Err(validation_error(
            "file_size",
            format!("File too large: {actual_mb:.2} MB (max: {max_mb:.2} MB)"),
        ))
    }
}

fn is_hex_with_prefix(value: &str, hex_len: usize) -> bool {
    match value.strip_prefix("0x") {
        Some(rest) => rest.len() == hex_len && rest.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// Check hash format: `0x` followed by exactly 64 hex characters.
pub fn is_valid_hash(hash: &str) -> bool {
    is_hex_with_prefix(hash, 64)
}

/// Validate hash format (0x-prefixed 64 hex characters)
pub fn validate_hash(hash: &str) -> Result<(), NotaryError> {
    if is_valid_hash(hash) {
        Ok(())
    } else {
        Err(validation_error(
            "hash",
            format!("Invalid hash format. Expected: 0x + 64 hex chars, got: {hash}"),
        ))
    }
}

/// Check Ethereum address format: `0x` followed by exactly 40 hex characters.
pub fn is_valid_ethereum_address(address: &str) -> bool {
    is_hex_with_prefix(address, 40)
}

/// Validate Ethereum address format
pub fn validate_ethereum_address(address: &str) -> Result<(), NotaryError> {
    if is_valid_ethereum_address(address) {
        Ok(())
    } else {
        Err(validation_error(
            "ethereum_address",
            format!("Invalid Ethereum address format. Expected: 0x + 40 hex chars, got: {address}"),
        ))
    }
}

/// Validate transaction hash format; same shape as a document hash.
pub fn validate_transaction_hash(tx_hash: &str) -> Result<(), NotaryError> {
    if is_valid_hash(tx_hash) {
        Ok(())
    } else {
        Err(validation_error(
            "transaction_hash",
            format!("Invalid transaction hash format. Expected: 0x + 64 hex chars, got: {tx_hash}"),
        ))
    }
}

/// Validate that required fields are present and non-null
pub fn validate_required_fields(
    data: &Map<String, Value>,
    required: &[&str],
) -> Result<(), NotaryError> {
    let missing: Vec<&str> = required
        .iter()
        .filter(|field| matches!(data.get(**field), None | Some(Value::Null)))
        .copied()
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(validation_error(
            "required_fields",
            format!("Missing required fields: {}", missing.join(", ")),
        ))
    }
}

/// Validate that value is a positive integer
pub fn validate_positive_integer(value: i64, field_name: &str) -> Result<(), NotaryError> {
    if value > 0 {
        Ok(())
    } else {
        Err(validation_error(
            field_name,
            format!("Must be a positive integer, got: {value}"),
        ))
    }
}

/// Validate string length against inclusive bounds
pub fn validate_string_length(
    value: &str,
    field_name: &str,
    min_length: usize,
    max_length: Option<usize>,
) -> Result<(), NotaryError> {
    let length = value.chars().count();

    if length < min_length {
        return Err(validation_error(
            field_name,
            format!("Must be at least {min_length} characters, got {length}"),
        ));
    }
    if let Some(max) = max_length {
        if length > max {
            return Err(validation_error(
                field_name,
                format!("Must be at most {max} characters, got {length}"),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn assert_validation_field(err: NotaryError, expected_field: &str) {
        match err {
            NotaryError::Validation { field, .. } => assert_eq!(field, expected_field),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_emails() {
        for email in [
            "user@example.com",
            "first.last@example.co.uk",
            "user+tag@sub.example.org",
            "u_%-@example.io",
        ] {
            assert!(is_valid_email(email), "should accept: {email}");
            assert!(validate_email(email).is_ok());
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "user@",
            "@example.com",
            "user",
            "user@example",
            "user@example.c",
            "user@example.c0m",
            "user name@example.com",
            "",
        ] {
            assert!(!is_valid_email(email), "should reject: {email}");
        }
    }

    #[test]
    fn test_validate_email_error_details() {
        let err = validate_email("user@").unwrap_err();
        assert_eq!(err.details().get("field"), Some(&json!("email")));
        assert_validation_field(err, "email");
    }

    #[test]
    fn test_file_type_by_extension() {
        assert!(validate_file_type("contract.pdf", None).is_ok());
        assert!(validate_file_type("scan.JPEG", None).is_ok());
        assert!(validate_file_type("malware.exe", None).is_err());
        assert!(validate_file_type("no_extension", None).is_err());
    }

    #[test]
    fn test_file_type_by_mime() {
        assert!(validate_file_type("anything", Some("application/pdf")).is_ok());
        let err = validate_file_type("anything", Some("video/mp4")).unwrap_err();
        assert_validation_field(err, "file_type");
    }

    #[test]
    fn test_file_size_ceiling() {
        // 100 MiB ceiling is inclusive
        assert!(validate_file_size(100 * 1024 * 1024).is_ok());
        let err = validate_file_size(100 * 1024 * 1024 + 1).unwrap_err();
        assert_validation_field(err, "file_size");
    }

    #[test]
    fn test_hash_format() {
        let valid = format!("0x{}", "a".repeat(64));
        assert!(validate_hash(&valid).is_ok());
        assert!(is_valid_hash(&valid.to_uppercase().replace("0X", "0x")));

        assert!(!is_valid_hash(&format!("0x{}", "a".repeat(63))));
        assert!(!is_valid_hash(&"a".repeat(64)));
        assert!(!is_valid_hash(&format!("0x{}", "g".repeat(64))));
        assert_validation_field(validate_hash("nope").unwrap_err(), "hash");
    }

    #[test]
    fn test_ethereum_address_format() {
        let valid = format!("0x{}", "a".repeat(40));
        assert!(validate_ethereum_address(&valid).is_ok());

        let short = format!("0x{}", "a".repeat(39));
        let err = validate_ethereum_address(&short).unwrap_err();
        assert_validation_field(err, "ethereum_address");
    }

    #[test]
    fn test_transaction_hash_field_name() {
        let err = validate_transaction_hash("0x123").unwrap_err();
        assert_validation_field(err, "transaction_hash");
        assert!(validate_transaction_hash(&format!("0x{}", "b".repeat(64))).is_ok());
    }

    #[test]
    fn test_required_fields() {
        let mut data = Map::new();
        data.insert("name".to_string(), json!("doc.pdf"));
        data.insert("network".to_string(), Value::Null);

        assert!(validate_required_fields(&data, &["name"]).is_ok());

        let err = validate_required_fields(&data, &["name", "network", "owner"]).unwrap_err();
        match &err {
            NotaryError::Validation { reason, .. } => {
                // Explicit null counts as missing.
                assert!(reason.contains("network"));
                assert!(reason.contains("owner"));
                assert!(!reason.contains("name,"));
            }
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_positive_integer() {
        assert!(validate_positive_integer(5, "gas_limit").is_ok());
        assert_validation_field(validate_positive_integer(0, "gas_limit").unwrap_err(), "gas_limit");
        assert_validation_field(validate_positive_integer(-3, "page").unwrap_err(), "page");
    }

    #[test]
    fn test_string_length_bounds() {
        assert!(validate_string_length("password", "password", 8, Some(128)).is_ok());
        assert_validation_field(
            validate_string_length("short", "password", 8, Some(128)).unwrap_err(),
            "password",
        );
        assert_validation_field(
            validate_string_length(&"x".repeat(129), "password", 8, Some(128)).unwrap_err(),
            "password",
        );
        assert!(validate_string_length("anything goes", "note", 0, None).is_ok());
    }
}
