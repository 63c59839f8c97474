pub mod bits;
pub mod config;
pub mod embed;
pub mod error;
pub mod extract;
pub mod features;
pub mod fingerprint;
pub mod signal;
pub mod verify;

#[cfg(feature = "parallel")]
pub mod parallel;

// Re-export primary API types
pub use bits::BitSequence;
pub use config::WatermarkConfig;
pub use error::Error;
pub use features::{FeatureMatrix, FeatureVector};
pub use fingerprint::Fingerprint;
pub use signal::Signal;
pub use verify::{Verdict, VerifyResult};

#[cfg(feature = "parallel")]
pub use parallel::{embed_batch, verify_batch};

/// Reduce a feature matrix to its per-row mean vector.
pub fn summarize(matrix: &FeatureMatrix) -> FeatureVector {
    features::summarize(matrix)
}

/// Fingerprint a feature vector and derive the watermark bit sequence.
pub fn generate(
    features: &FeatureVector,
    hex_prefix_len: usize,
) -> error::Result<(Fingerprint, BitSequence)> {
    fingerprint::generate(features, hex_prefix_len)
}

/// Embed a bit sequence into the leading samples of a signal.
///
/// Returns an independent watermarked copy; the source is never modified.
pub fn embed(source: &Signal, bits: &BitSequence, strength: f32) -> error::Result<Signal> {
    embed::embed(source, bits, strength)
}

/// Extract a bit sequence from a candidate signal by comparison against the
/// original reference signal.
pub fn extract(
    reference: &Signal,
    candidate: &Signal,
    bit_len: usize,
) -> error::Result<BitSequence> {
    extract::extract(reference, candidate, bit_len)
}

/// Compare expected and extracted bit sequences and rule on authenticity.
pub fn verify(
    expected: &BitSequence,
    extracted: &BitSequence,
    threshold_pct: f32,
) -> error::Result<VerifyResult> {
    verify::verify(expected, extracted, threshold_pct)
}

/// Extract from `candidate` against `reference` and verify in one step.
///
/// The bit length is taken from `expected`.
pub fn authenticate(
    reference: &Signal,
    candidate: &Signal,
    expected: &BitSequence,
    threshold_pct: f32,
) -> error::Result<VerifyResult> {
    let extracted = extract::extract(reference, candidate, expected.len())?;
    verify::verify(expected, &extracted, threshold_pct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_pipeline_round_trip() {
        let config = WatermarkConfig::default();
        let matrix = FeatureMatrix::from_rows(&[
            vec![1.0, 2.0, 3.0],
            vec![-4.0, 0.5, 0.0],
        ])
        .unwrap();
        let vector = summarize(&matrix);
        let (_, bits) = generate(&vector, config.hex_prefix_len).unwrap();
        assert_eq!(bits.len(), config.bit_len());

        // Signal exactly as long as the bit sequence: every sample carries a bit
        let source = Signal::new(vec![0.0; 128], 48000);
        let marked = embed(&source, &bits, config.strength).unwrap();

        let result = authenticate(&source, &marked, &bits, config.threshold_pct).unwrap();
        assert_eq!(result.verdict, Verdict::Authentic);
        assert_eq!(result.match_pct, 100.0);
    }

    #[test]
    fn untampered_unmarked_candidate_reads_by_formula() {
        // A candidate identical to the reference extracts all zeros, so the
        // match percentage equals the fraction of expected bits that are 0.
        let config = WatermarkConfig::default();
        let vector = FeatureVector::new(vec![1.0, 2.0, 3.0]);
        let (_, bits) = generate(&vector, config.hex_prefix_len).unwrap();

        let reference = Signal::new(vec![0.0; 256], 48000);
        let result =
            authenticate(&reference, &reference.clone(), &bits, config.threshold_pct).unwrap();

        let zeros = bits.len() - bits.count_ones();
        let expected_pct = 100.0 * zeros as f32 / bits.len() as f32;
        assert_eq!(result.match_pct, expected_pct);
        let expected_verdict = if expected_pct > config.threshold_pct {
            Verdict::Authentic
        } else {
            Verdict::Tampered
        };
        assert_eq!(result.verdict, expected_verdict);
    }
}
