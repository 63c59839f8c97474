//! Spectral feature extraction for fingerprinting.
//!
//! Produces a log mel-band energy matrix from a mono signal: Hann-windowed
//! frames, real FFT power spectrum, triangular mel filterbank. The core
//! treats the result as an opaque feature matrix.

use realfft::RealFftPlanner;

use huella_core::error::Result;
use huella_core::{FeatureMatrix, Signal};

/// FFT analysis window in samples.
pub const FRAME_SIZE: usize = 2048;
/// Advance between analysis frames in samples.
pub const HOP_SIZE: usize = 512;

/// Floor added before the log to keep silent bands finite.
const LOG_FLOOR: f64 = 1e-10;

fn hz_to_mel(hz: f64) -> f64 {
    2595.0 * (1.0 + hz / 700.0).log10()
}

fn mel_to_hz(mel: f64) -> f64 {
    700.0 * (10f64.powf(mel / 2595.0) - 1.0)
}

/// Generate a Hann window of the given size.
fn hann_window(size: usize) -> Vec<f32> {
    let n = size as f32;
    (0..size)
        .map(|i| 0.5 * (1.0 - (2.0 * std::f32::consts::PI * i as f32 / n).cos()))
        .collect()
}

/// Triangular mel filters as fractional FFT-bin breakpoints
/// `(lower, center, upper)` per band.
fn mel_filter_points(num_bands: usize, sample_rate: u32) -> Vec<(f64, f64, f64)> {
    let max_mel = hz_to_mel(sample_rate as f64 / 2.0);
    let bins_per_hz = FRAME_SIZE as f64 / sample_rate as f64;
    let mel_step = max_mel / (num_bands + 1) as f64;

    (0..num_bands)
        .map(|m| {
            let lower = mel_to_hz(mel_step * m as f64) * bins_per_hz;
            let center = mel_to_hz(mel_step * (m + 1) as f64) * bins_per_hz;
            let upper = mel_to_hz(mel_step * (m + 2) as f64) * bins_per_hz;
            (lower, center, upper)
        })
        .collect()
}

/// Compute a log mel-band energy matrix: one row per band, one column per
/// analysis frame. Signals shorter than one frame are zero-padded to a
/// single frame.
pub fn mel_features(signal: &Signal, num_bands: usize) -> Result<FeatureMatrix> {
    let samples = signal.samples();
    let num_frames = if samples.len() >= FRAME_SIZE {
        1 + (samples.len() - FRAME_SIZE) / HOP_SIZE
    } else {
        1
    };

    let window = hann_window(FRAME_SIZE);
    let filters = mel_filter_points(num_bands, signal.sample_rate());

    let mut planner = RealFftPlanner::<f32>::new();
    let fft = planner.plan_fft_forward(FRAME_SIZE);
    let mut spectrum = fft.make_output_vec();
    let mut scratch = fft.make_scratch_vec();
    let mut frame = vec![0.0f32; FRAME_SIZE];
    let mut power = vec![0.0f64; FRAME_SIZE / 2 + 1];

    let mut rows = vec![Vec::with_capacity(num_frames); num_bands];

    for frame_idx in 0..num_frames {
        let start = frame_idx * HOP_SIZE;
        let end = (start + FRAME_SIZE).min(samples.len());
        frame.fill(0.0);
        frame[..end - start].copy_from_slice(&samples[start..end]);
        for (s, w) in frame.iter_mut().zip(&window) {
            *s *= w;
        }

        fft.process_with_scratch(&mut frame, &mut spectrum, &mut scratch)
            .expect("buffer sizes match the FFT plan");
        for (p, c) in power.iter_mut().zip(&spectrum) {
            *p = (c.re as f64).powi(2) + (c.im as f64).powi(2);
        }

        for (band, &(lower, center, upper)) in filters.iter().enumerate() {
            let mut energy = 0.0f64;
            let first = lower.ceil() as usize;
            let last = (upper.floor() as usize).min(power.len() - 1);
            for (k, &p) in power.iter().enumerate().take(last + 1).skip(first) {
                let k = k as f64;
                let weight = if k <= center {
                    if center > lower { (k - lower) / (center - lower) } else { 0.0 }
                } else if upper > center {
                    (upper - k) / (upper - center)
                } else {
                    0.0
                };
                energy += weight * p;
            }
            rows[band].push((energy + LOG_FLOOR).ln());
        }
    }

    FeatureMatrix::from_rows(&rows)
}
