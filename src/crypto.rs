//! Hashing helpers and API key generation.
//!
//! Digests are SHA-256, rendered as `0x` + 64 lower-case hex characters
//! (66 characters total) to match the on-chain document-hash format. The
//! `*_async` variants offload digest work to the blocking worker pool so
//! large inputs do not stall the async runtime.

use rand::rngs::OsRng;
use rand::RngCore;
use serde_json::{json, Map};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::errors::NotaryError;

/// Read size for chunked file hashing
const DEFAULT_CHUNK_SIZE: usize = 8192;

/// A freshly generated API key.
///
/// `full_key` is the secret and is returned exactly once; store only
/// `key_hash` and show `display_prefix` in UIs for identification.
#[derive(Debug, Clone)]
pub struct GeneratedApiKey {
    pub full_key: String,
    pub key_hash: String,
    pub display_prefix: String,
}

fn hex_digest(hasher: Sha256) -> String {
    format!("0x{}", hex::encode(hasher.finalize()))
}

/// Calculate the SHA-256 hash of a byte slice.
pub fn hash_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex_digest(hasher)
}

/// Calculate the SHA-256 hash of a string's UTF-8 bytes.
pub fn hash_string(data: &str) -> String {
    hash_bytes(data.as_bytes())
}

/// Calculate the SHA-256 hash of a file, reading it in chunks.
///
/// I/O failures come back as a generic `FILE_READ_FAILED` error so callers
/// never see a foreign error type at the API boundary.
pub fn hash_file(path: impl AsRef<Path>) -> Result<String, NotaryError> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| file_read_error(path, &e))?;

    let mut hasher = Sha256::new();
    let mut buf = [0u8; DEFAULT_CHUNK_SIZE];
    loop {
        let n = file.read(&mut buf).map_err(|e| file_read_error(path, &e))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(hex_digest(hasher))
}

/// Calculate the SHA-256 hash of a byte buffer without blocking the caller.
pub async fn hash_bytes_async(data: Vec<u8>) -> Result<String, NotaryError> {
    tokio::task::spawn_blocking(move || hash_bytes(&data))
        .await
        .map_err(|e| NotaryError::other(format!("Hash worker failed: {e}")))
}

/// Calculate the SHA-256 hash of a file without blocking the caller.
///
/// The read runs on the blocking worker pool; the result is identical to
/// [`hash_file`].
pub async fn hash_file_async(path: impl Into<PathBuf>) -> Result<String, NotaryError> {
    let path = path.into();
    tokio::task::spawn_blocking(move || hash_file(&path))
        .await
        .map_err(|e| NotaryError::other(format!("Hash worker failed: {e}")))?
}

/// Verify that `data` hashes to `expected_hash`.
///
/// The expected value is normalized first: letter case is ignored and a
/// leading `0x` is optional.
pub fn verify_hash(data: impl AsRef<[u8]>, expected_hash: &str) -> bool {
    let expected = expected_hash.to_ascii_lowercase();
    let expected = expected.strip_prefix("0x").unwrap_or(&expected);

    let actual = hash_bytes(data.as_ref());
    let actual = actual.strip_prefix("0x").unwrap_or(&actual);

    actual == expected
}

/// Generate a high-entropy API key.
///
/// The random part is 32 bytes from the OS RNG, hex-encoded, so the full
/// key is `{prefix}_{64 hex chars}`. Only the hash is suitable for storage;
/// the full key cannot be recovered from it.
pub fn generate_api_key(prefix: &str) -> GeneratedApiKey {
    let mut secret = [0u8; 32];
    OsRng.fill_bytes(&mut secret);
    let random_part = hex::encode(secret);

    let full_key = format!("{prefix}_{random_part}");
    let key_hash = hash_string(&full_key);
    let display_prefix = format!("{prefix}_{}", &random_part[..8]);

    GeneratedApiKey {
        full_key,
        key_hash,
        display_prefix,
    }
}

fn file_read_error(path: &Path, err: &std::io::Error) -> NotaryError {
    let mut details = Map::new();
    details.insert("path".to_string(), json!(path.display().to_string()));
    details.insert("reason".to_string(), json!(err.to_string()));
    NotaryError::with_code(
        format!("Failed to read file: {}", path.display()),
        "FILE_READ_FAILED",
        details,
    )
}
