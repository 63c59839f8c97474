use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("empty feature matrix: need at least one feature row and one time frame")]
    EmptyFeatureMatrix,

    #[error("ragged feature matrix: row {row} has {got} frames, expected {expected}")]
    RaggedFeatureMatrix {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("empty signal")]
    EmptySignal,

    #[error("signal too short: need at least {needed} samples, got {got}")]
    SignalTooShort { needed: usize, got: usize },

    #[error("sample rate mismatch: reference {reference} Hz, candidate {candidate} Hz")]
    SampleRateMismatch { reference: u32, candidate: u32 },

    #[error("bit sequence length mismatch: expected {expected} bits, got {got}")]
    BitLengthMismatch { expected: usize, got: usize },

    #[error("empty bit sequence")]
    EmptyBitSequence,

    #[error("non-positive watermark strength: {0}")]
    InvalidStrength(f32),

    #[error("hex prefix length {got} out of range: must be 1..={max}")]
    InvalidHexPrefixLen { got: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
