use crate::bits::BitSequence;
use crate::error::{Error, Result};
use crate::signal::Signal;

/// Recover a bit sequence by comparing a candidate signal against the
/// original, unwatermarked reference.
///
/// Bit `i` is 1 iff `candidate[i] > reference[i]` (strict), for `i` in
/// `0..bit_len`. Extraction is purely comparative: the verifier must retain
/// the reference signal, and a candidate identical to the reference reads as
/// all zeros. This reference-dependence is the scheme's documented contract,
/// not a recoverable self-contained watermark.
pub fn extract(reference: &Signal, candidate: &Signal, bit_len: usize) -> Result<BitSequence> {
    if bit_len == 0 {
        return Err(Error::EmptyBitSequence);
    }
    if reference.sample_rate() != candidate.sample_rate() {
        return Err(Error::SampleRateMismatch {
            reference: reference.sample_rate(),
            candidate: candidate.sample_rate(),
        });
    }
    let shortest = reference.len().min(candidate.len());
    if shortest < bit_len {
        return Err(Error::SignalTooShort {
            needed: bit_len,
            got: shortest,
        });
    }

    let bits = reference.samples()[..bit_len]
        .iter()
        .zip(&candidate.samples()[..bit_len])
        .map(|(r, c)| c > r)
        .collect();
    Ok(BitSequence::new(bits))
}
