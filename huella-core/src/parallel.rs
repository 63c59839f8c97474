//! Optional batch processing using rayon.
//!
//! Enable with the `parallel` feature flag. Every core operation is a pure
//! function over its own inputs, so independent signals can be processed
//! concurrently with no shared state; results are identical to running the
//! sequential API per item.

use rayon::prelude::*;

use crate::bits::BitSequence;
use crate::embed;
use crate::error::Result;
use crate::extract::extract;
use crate::signal::Signal;
use crate::verify::{verify, VerifyResult};

/// Embed the same bit sequence into many independent signals.
///
/// Functionally identical to calling [`crate::embed`] per signal. The first
/// error encountered aborts the batch.
pub fn embed_batch(
    sources: &[Signal],
    bits: &BitSequence,
    strength: f32,
) -> Result<Vec<Signal>> {
    sources
        .par_iter()
        .map(|source| embed::embed(source, bits, strength))
        .collect()
}

/// Screen many candidate signals against one reference.
///
/// Each candidate is extracted against the reference and verified against
/// the expected bit sequence. The first error encountered aborts the batch.
pub fn verify_batch(
    reference: &Signal,
    candidates: &[Signal],
    expected: &BitSequence,
    threshold_pct: f32,
) -> Result<Vec<VerifyResult>> {
    candidates
        .par_iter()
        .map(|candidate| {
            let extracted = extract(reference, candidate, expected.len())?;
            verify(expected, &extracted, threshold_pct)
        })
        .collect()
}
