use crate::bits::BitSequence;
use crate::error::{Error, Result};
use crate::signal::Signal;

pub(crate) fn validate_strength(strength: f32) -> Result<()> {
    if !(strength > 0.0) {
        return Err(Error::InvalidStrength(strength));
    }
    Ok(())
}

/// Embed a bit sequence into a signal as small additive perturbations.
///
/// Sample `i` is nudged by `+strength` for bit 1 and `-strength` for bit 0,
/// for `i` in `0..bits.len()`; every later sample is copied unchanged. The
/// watermark is positional, not spectral: one amplitude offset per bit at
/// fixed sample positions, recoverable only while the signal stays
/// bit-exact at those positions.
///
/// Returns an independent copy; the source signal is never modified.
pub fn embed(source: &Signal, bits: &BitSequence, strength: f32) -> Result<Signal> {
    validate_strength(strength)?;
    if bits.is_empty() {
        return Err(Error::EmptyBitSequence);
    }
    if source.is_empty() {
        return Err(Error::EmptySignal);
    }
    if source.len() < bits.len() {
        return Err(Error::SignalTooShort {
            needed: bits.len(),
            got: source.len(),
        });
    }

    let mut samples = source.samples().to_vec();
    for (sample, &bit) in samples.iter_mut().zip(bits.as_slice()) {
        *sample += if bit { strength } else { -strength };
    }
    Ok(Signal::new(samples, source.sample_rate()))
}
