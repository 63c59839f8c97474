//! Tamper simulation: additive zero-mean Gaussian noise on a watermarked
//! signal, swept over increasing magnitudes.
//!
//! The watermark is positional and fragile, so recovery degrades from exact
//! (no noise) toward chance (~50%) as the noise standard deviation passes
//! the embedding strength. Seeded RNG keeps every run deterministic.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use huella_core::{BitSequence, FeatureVector, Signal, Verdict, WatermarkConfig};

fn derive_bits(config: &WatermarkConfig) -> BitSequence {
    let features = FeatureVector::new(vec![3.5, -1.0, 0.25, 8.0]);
    let (_, bits) = huella_core::generate(&features, config.hex_prefix_len).unwrap();
    bits
}

fn add_noise(signal: &Signal, std_dev: f32, rng: &mut StdRng) -> Signal {
    let normal = Normal::new(0.0f32, std_dev).expect("valid std dev");
    let samples = signal
        .samples()
        .iter()
        .map(|s| s + normal.sample(rng))
        .collect();
    Signal::new(samples, signal.sample_rate())
}

#[test]
fn noiseless_candidate_verifies_at_exactly_100() {
    let config = WatermarkConfig::default();
    let bits = derive_bits(&config);
    let reference = Signal::new(vec![0.0; 1024], 48000);
    let marked = huella_core::embed(&reference, &bits, config.strength).unwrap();

    let result =
        huella_core::authenticate(&reference, &marked, &bits, config.threshold_pct).unwrap();
    assert_eq!(result.verdict, Verdict::Authentic);
    assert_eq!(result.match_pct, 100.0);
}

#[test]
fn slight_noise_still_authentic() {
    // Noise at one fifth of the strength flips essentially no bits.
    let config = WatermarkConfig::default();
    let bits = derive_bits(&config);
    let reference = Signal::new(vec![0.0; 1024], 48000);
    let marked = huella_core::embed(&reference, &bits, config.strength).unwrap();

    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..10 {
        let tampered = add_noise(&marked, config.strength / 5.0, &mut rng);
        let result =
            huella_core::authenticate(&reference, &tampered, &bits, config.threshold_pct).unwrap();
        assert_eq!(result.verdict, Verdict::Authentic);
        assert!(result.match_pct > 95.0);
    }
}

#[test]
fn heavy_noise_is_tampered() {
    // Noise at 50x the strength drives recovery to chance, far below the
    // 80% threshold.
    let config = WatermarkConfig::default();
    let bits = derive_bits(&config);
    let reference = Signal::new(vec![0.0; 1024], 48000);
    let marked = huella_core::embed(&reference, &bits, config.strength).unwrap();

    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..10 {
        let tampered = add_noise(&marked, config.strength * 50.0, &mut rng);
        let result =
            huella_core::authenticate(&reference, &tampered, &bits, config.threshold_pct).unwrap();
        assert_eq!(result.verdict, Verdict::Tampered);
    }
}

#[test]
fn match_pct_non_increasing_with_noise() {
    let config = WatermarkConfig::default();
    let bits = derive_bits(&config);
    let reference = Signal::new(vec![0.0; 1024], 48000);
    let marked = huella_core::embed(&reference, &bits, config.strength).unwrap();

    // Well-separated noise magnitudes: expected recovery drops from ~100%
    // through ~84% and ~58% toward ~51%.
    let noise_levels = [
        config.strength * 0.2,
        config.strength,
        config.strength * 5.0,
        config.strength * 50.0,
    ];
    let trials = 30;

    let mut rng = StdRng::seed_from_u64(42);
    let averages: Vec<f32> = noise_levels
        .iter()
        .map(|&std_dev| {
            let total: f32 = (0..trials)
                .map(|_| {
                    let tampered = add_noise(&marked, std_dev, &mut rng);
                    huella_core::authenticate(&reference, &tampered, &bits, config.threshold_pct)
                        .unwrap()
                        .match_pct
                })
                .sum();
            total / trials as f32
        })
        .collect();

    for pair in averages.windows(2) {
        assert!(
            pair[1] <= pair[0] + 1.0,
            "average match should not increase with noise: {averages:?}"
        );
    }
    assert!(averages[0] > 95.0, "light noise average too low: {averages:?}");
    assert!(averages[3] < 70.0, "heavy noise average too high: {averages:?}");
}

#[test]
fn extraction_length_matches_request_under_noise() {
    let config = WatermarkConfig::default();
    let bits = derive_bits(&config);
    let reference = Signal::new(vec![0.0; 1024], 48000);
    let marked = huella_core::embed(&reference, &bits, config.strength).unwrap();

    let mut rng = StdRng::seed_from_u64(3);
    let tampered = add_noise(&marked, config.strength * 2.0, &mut rng);
    let extracted = huella_core::extract(&reference, &tampered, bits.len()).unwrap();
    assert_eq!(extracted.len(), bits.len());
}
