use crate::error::Result;
use crate::fingerprint::DIGEST_HEX_LEN;

/// Configuration for fingerprint derivation and watermark verification.
#[derive(Debug, Clone)]
pub struct WatermarkConfig {
    /// Watermark embedding strength: the amplitude offset applied per bit.
    /// Higher = easier to recover under noise but more audible. Default: 0.0001.
    pub strength: f32,
    /// Number of leading fingerprint hex characters expanded into the
    /// embedded bit sequence. Bit length is 8x this value. Default: 16.
    pub hex_prefix_len: usize,
    /// Bit-match percentage a candidate must strictly exceed to be ruled
    /// authentic. Default: 80.0.
    pub threshold_pct: f32,
}

impl Default for WatermarkConfig {
    fn default() -> Self {
        Self {
            strength: 0.0001,
            hex_prefix_len: 16,
            threshold_pct: 80.0,
        }
    }
}

impl WatermarkConfig {
    /// Length in bits of the sequence derived from `hex_prefix_len`.
    pub fn bit_len(&self) -> usize {
        self.hex_prefix_len * 8
    }

    /// Check that the configuration can produce a valid watermark.
    pub fn validate(&self) -> Result<()> {
        crate::embed::validate_strength(self.strength)?;
        crate::fingerprint::validate_hex_prefix_len(self.hex_prefix_len)?;
        Ok(())
    }

    /// Maximum admissible `hex_prefix_len` (the digest's hex length).
    pub fn max_hex_prefix_len() -> usize {
        DIGEST_HEX_LEN
    }
}
