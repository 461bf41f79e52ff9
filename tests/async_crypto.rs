use std::io::Write;

use notary_utils::crypto;

#[tokio::test]
async fn test_hash_bytes_async_matches_sync() {
    let data = b"async hashing parity".to_vec();
    let async_hash = crypto::hash_bytes_async(data.clone()).await.unwrap();
    assert_eq!(async_hash, crypto::hash_bytes(&data));
}

#[tokio::test]
async fn test_hash_file_async_matches_sync() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"notarized document body").unwrap();

    let async_hash = crypto::hash_file_async(file.path()).await.unwrap();
    let sync_hash = crypto::hash_file(file.path()).unwrap();
    assert_eq!(async_hash, sync_hash);
    assert!(async_hash.starts_with("0x"));
    assert_eq!(async_hash.len(), 66);
}

#[tokio::test]
async fn test_hash_large_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    // Multi-megabyte input spanning many read chunks
    let block = vec![0x5au8; 1024 * 1024];
    for _ in 0..3 {
        file.write_all(&block).unwrap();
    }
    file.flush().unwrap();

    let hash = crypto::hash_file_async(file.path()).await.unwrap();
    assert_eq!(hash.len(), 66);
    assert_eq!(hash, crypto::hash_file(file.path()).unwrap());
}

#[tokio::test]
async fn test_hash_file_async_nonexistent() {
    let err = crypto::hash_file_async("/nonexistent/file.txt")
        .await
        .unwrap_err();
    assert_eq!(err.code_str(), "FILE_READ_FAILED");
}

#[tokio::test]
async fn test_concurrent_hashing_is_consistent() {
    let data = b"shared across tasks".to_vec();
    let expected = crypto::hash_bytes(&data);

    let tasks: Vec<_> = (0..8)
        .map(|_| crypto::hash_bytes_async(data.clone()))
        .collect();
    for task in tasks {
        assert_eq!(task.await.unwrap(), expected);
    }
}
