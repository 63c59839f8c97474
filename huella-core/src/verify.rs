use std::fmt;

use crate::bits::BitSequence;
use crate::error::{Error, Result};

/// The binary authenticity decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Authentic,
    Tampered,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Authentic => f.write_str("AUTHENTIC"),
            Verdict::Tampered => f.write_str("TAMPERED"),
        }
    }
}

/// Outcome of a verification: the verdict plus the match percentage that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerifyResult {
    pub verdict: Verdict,
    /// Percentage of bit positions where expected and extracted agree.
    pub match_pct: f32,
}

/// Compare an extracted bit sequence against the expected one and rule on
/// authenticity.
///
/// `match_pct = 100 * matching_positions / len`. The verdict is
/// [`Verdict::Authentic`] iff `match_pct` is strictly greater than
/// `threshold_pct`; an exact tie is ruled tampered.
pub fn verify(
    expected: &BitSequence,
    extracted: &BitSequence,
    threshold_pct: f32,
) -> Result<VerifyResult> {
    if expected.is_empty() {
        return Err(Error::EmptyBitSequence);
    }
    if expected.len() != extracted.len() {
        return Err(Error::BitLengthMismatch {
            expected: expected.len(),
            got: extracted.len(),
        });
    }

    let matches = expected.matching_bits(extracted);
    let match_pct = 100.0 * matches as f32 / expected.len() as f32;
    let verdict = if match_pct > threshold_pct {
        Verdict::Authentic
    } else {
        Verdict::Tampered
    };
    Ok(VerifyResult { verdict, match_pct })
}
