use sha2::{Digest, Sha256};

/// Compute SHA-256 hash of a byte slice.
pub fn sha256_bytes(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hex-encoded SHA-256 of a byte slice. Identifies a catalog's exact contents.
pub fn fingerprint(data: &[u8]) -> String {
    hex_encode(&sha256_bytes(data))
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_deterministic() {
        assert_eq!(fingerprint(b"job_title"), fingerprint(b"job_title"));
    }

    #[test]
    fn fingerprint_changes_with_content() {
        assert_ne!(fingerprint(b"a,b\n1,2\n"), fingerprint(b"a,b\n1,3\n"));
    }

    #[test]
    fn fingerprint_empty_input() {
        let fp = fingerprint(b"");
        assert_eq!(fp.len(), 64); // SHA-256 = 32 bytes = 64 hex chars
        assert_eq!(
            fp,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
