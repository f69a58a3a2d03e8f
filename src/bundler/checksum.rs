//! Artifact checksum calculation.

use super::error::{ErrorExt, Result};
use sha2::{Digest, Sha256};
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Calculates the SHA-256 checksum of a file.
///
/// Reads the file in 8KB chunks to handle large archives efficiently.
/// Returns the hex-encoded hash (64 characters).
pub async fn calculate_sha256(path: &Path) -> Result<String> {
    let mut file = tokio::fs::File::open(path)
        .await
        .fs_context("opening file for hashing", path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; 8192];

    loop {
        let n = file
            .read(&mut buffer)
            .await
            .fs_context("reading file for hash calculation", path)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_input_hashes_to_the_expected_digest() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("artifact.zip");
        tokio::fs::write(&path, b"abc").await.expect("write");

        let digest = calculate_sha256(&path).await.expect("hash");
        assert_eq!(
            digest,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
