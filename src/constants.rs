//! Shared constants for the notary platform.

/// Blockchain networks the platform can anchor documents on
pub const SUPPORTED_NETWORKS: &[&str] = &["polygon", "ethereum", "celo", "sepolia", "localhost"];

/// Default gas limit for notarization transactions
pub const DEFAULT_GAS_LIMIT: u64 = 300_000;

/// Maximum gas price in Gwei, to prevent overpaying
pub const MAX_GAS_PRICE_GWEI: u64 = 100;

/// Maximum accepted file size in bytes (100 MiB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// MIME types accepted for notarization
pub const SUPPORTED_FILE_TYPES: &[&str] = &[
    "application/pdf",
    "image/png",
    "image/jpeg",
    "application/json",
    "text/plain",
    "text/csv",
    "application/zip",
];

/// Default prefix for live API keys
pub const API_KEY_PREFIX: &str = "sk_live";

/// Prefix for test-mode API keys
pub const API_KEY_TEST_PREFIX: &str = "sk_test";

/// Map a file extension (without the dot, lower-case) to its MIME type.
pub fn extension_to_mime(extension: &str) -> Option<&'static str> {
    match extension {
        "pdf" => Some("application/pdf"),
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "json" => Some("application/json"),
        "txt" => Some("text/plain"),
        "csv" => Some("text/csv"),
        "zip" => Some("application/zip"),
        _ => None,
    }
}
