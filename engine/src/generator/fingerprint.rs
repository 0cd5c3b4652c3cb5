//! Result fingerprints
//!
//! A SHA-256 digest over the serialized outcome sequence. Two searches
//! produced the same outcomes, in the same order, exactly when their
//! fingerprints match.

use sha2::{Digest, Sha256};

use super::config::GeneratorError;
use crate::models::WildState;

/// Compute the SHA-256 fingerprint of an outcome sequence
///
/// # Example
/// ```
/// use wild_finder_core::generator::fingerprint;
///
/// let empty = fingerprint(&[]).unwrap();
/// assert_eq!(empty.len(), 64);
/// ```
pub fn fingerprint(states: &[WildState]) -> Result<String, GeneratorError> {
    let json = serde_json::to_string(states).map_err(|e| {
        GeneratorError::SerializationError(format!("Outcome serialization failed: {}", e))
    })?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    let result = hasher.finalize();

    Ok(format!("{:x}", result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_order_sensitive() {
        let first = WildState::builder().advance(1).pid(25).build();
        let second = WildState::builder().advance(2).pid(50).build();

        let forward = fingerprint(&[first.clone(), second.clone()]).unwrap();
        let backward = fingerprint(&[second, first]).unwrap();
        assert_ne!(forward, backward);
    }

    #[test]
    fn test_fingerprint_of_empty_sequence() {
        // SHA-256 of "[]"
        assert_eq!(
            fingerprint(&[]).unwrap(),
            "4f53cda18c2baa0c0354bb5f9a3ecbe5ed12ab4d8e11ba873c2f11161202b945"
        );
    }
}
