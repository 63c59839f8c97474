use sha2::{Digest, Sha256};

use crate::bits::BitSequence;
use crate::error::{Error, Result};
use crate::features::FeatureVector;

/// Length of the fingerprint's hexadecimal rendering (SHA-256: 32 bytes).
pub const DIGEST_HEX_LEN: usize = 64;

/// A content fingerprint: the SHA-256 digest of a feature vector's
/// canonical byte form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    digest: [u8; 32],
}

impl Fingerprint {
    /// Hash a feature vector into a fingerprint. Deterministic: identical
    /// vectors always produce identical digests.
    pub fn compute(features: &FeatureVector) -> Self {
        let digest = Sha256::digest(features.to_canonical_bytes());
        Self {
            digest: digest.into(),
        }
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.digest
    }

    /// Lowercase hexadecimal rendering, 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.digest)
    }
}

/// Check that a hex prefix length can be served by the digest.
pub fn validate_hex_prefix_len(hex_prefix_len: usize) -> Result<()> {
    if hex_prefix_len == 0 || hex_prefix_len > DIGEST_HEX_LEN {
        return Err(Error::InvalidHexPrefixLen {
            got: hex_prefix_len,
            max: DIGEST_HEX_LEN,
        });
    }
    Ok(())
}

/// Fingerprint a feature vector and derive the watermark bit sequence.
///
/// The bit sequence is the ASCII expansion of the digest's first
/// `hex_prefix_len` hex characters (8 bits per character, MSB first), so its
/// length is always `8 * hex_prefix_len`.
pub fn generate(
    features: &FeatureVector,
    hex_prefix_len: usize,
) -> Result<(Fingerprint, BitSequence)> {
    validate_hex_prefix_len(hex_prefix_len)?;
    let fingerprint = Fingerprint::compute(features);
    let hex = fingerprint.to_hex();
    let bits = BitSequence::from_ascii(&hex[..hex_prefix_len]);
    Ok((fingerprint, bits))
}
