mod features;
mod wav;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use huella_core::{Signal, Verdict, WatermarkConfig};

#[derive(Parser)]
#[command(name = "huella", about = "Audio fingerprinting and tamper detection tool", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the content fingerprint of a WAV file
    Fingerprint {
        /// Input WAV file
        #[arg(short, long)]
        input: PathBuf,

        /// Number of mel bands in the feature matrix
        #[arg(long, default_value = "20")]
        num_bands: usize,

        /// Fingerprint hex characters expanded into the bit sequence
        #[arg(long, default_value = "16")]
        hex_prefix_len: usize,
    },
    /// Embed a fingerprint-derived watermark into a WAV file
    Embed {
        /// Input WAV file
        #[arg(short, long)]
        input: PathBuf,

        /// Output WAV file
        #[arg(short, long)]
        output: PathBuf,

        /// Per-bit amplitude offset
        #[arg(short, long, default_value = "0.0001")]
        strength: f32,

        /// Number of mel bands in the feature matrix
        #[arg(long, default_value = "20")]
        num_bands: usize,

        /// Fingerprint hex characters expanded into the bit sequence
        #[arg(long, default_value = "16")]
        hex_prefix_len: usize,
    },
    /// Simulate tampering by adding zero-mean Gaussian noise
    Tamper {
        /// Input WAV file
        #[arg(short, long)]
        input: PathBuf,

        /// Output WAV file
        #[arg(short, long)]
        output: PathBuf,

        /// Noise standard deviation
        #[arg(long, default_value = "0.0002")]
        noise_std: f32,

        /// RNG seed for reproducible noise
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Verify a candidate WAV file against the original reference
    Verify {
        /// Original, unwatermarked reference WAV file
        #[arg(short, long)]
        reference: PathBuf,

        /// Candidate WAV file to check
        #[arg(short, long)]
        candidate: PathBuf,

        /// Match percentage the candidate must strictly exceed
        #[arg(long, default_value = "80.0")]
        threshold_pct: f32,

        /// Number of mel bands in the feature matrix
        #[arg(long, default_value = "20")]
        num_bands: usize,

        /// Fingerprint hex characters expanded into the bit sequence
        #[arg(long, default_value = "16")]
        hex_prefix_len: usize,
    },
}

fn fingerprint_signal(
    signal: &Signal,
    num_bands: usize,
    hex_prefix_len: usize,
) -> Result<(huella_core::Fingerprint, huella_core::BitSequence), Box<dyn std::error::Error>> {
    let matrix = features::mel_features(signal, num_bands)?;
    let vector = huella_core::summarize(&matrix);
    Ok(huella_core::generate(&vector, hex_prefix_len)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Fingerprint {
            input,
            num_bands,
            hex_prefix_len,
        } => {
            let signal = wav::read_wav_mono(&input)?;
            eprintln!(
                "Fingerprinting {} ({} samples, {}Hz)...",
                input.display(),
                signal.len(),
                signal.sample_rate()
            );

            let (fingerprint, bits) = fingerprint_signal(&signal, num_bands, hex_prefix_len)?;
            println!("Fingerprint: {}", fingerprint.to_hex());
            println!("Watermark:   {} bits", bits.len());
        }
        Command::Embed {
            input,
            output,
            strength,
            num_bands,
            hex_prefix_len,
        } => {
            let config = WatermarkConfig {
                strength,
                hex_prefix_len,
                ..WatermarkConfig::default()
            };
            config.validate()?;

            let signal = wav::read_wav_mono(&input)?;
            eprintln!(
                "Embedding watermark into {} ({} samples, {}Hz)...",
                input.display(),
                signal.len(),
                signal.sample_rate()
            );

            let (fingerprint, bits) = fingerprint_signal(&signal, num_bands, hex_prefix_len)?;
            let marked = huella_core::embed(&signal, &bits, config.strength)?;
            wav::write_wav_f32(&output, &marked)?;

            eprintln!("Watermarked audio written to {}", output.display());
            println!("Fingerprint: {}", fingerprint.to_hex());
        }
        Command::Tamper {
            input,
            output,
            noise_std,
            seed,
        } => {
            let signal = wav::read_wav_mono(&input)?;
            eprintln!(
                "Adding Gaussian noise (std {}) to {}...",
                noise_std,
                input.display()
            );

            let normal = Normal::new(0.0f32, noise_std)?;
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let samples = signal
                .samples()
                .iter()
                .map(|s| s + normal.sample(&mut rng))
                .collect();
            let tampered = Signal::new(samples, signal.sample_rate());
            wav::write_wav_f32(&output, &tampered)?;

            eprintln!("Tampered audio written to {}", output.display());
        }
        Command::Verify {
            reference,
            candidate,
            threshold_pct,
            num_bands,
            hex_prefix_len,
        } => {
            let reference_signal = wav::read_wav_mono(&reference)?;
            let candidate_signal = wav::read_wav_mono(&candidate)?;
            eprintln!(
                "Verifying {} against {} ({} samples, {}Hz)...",
                candidate.display(),
                reference.display(),
                reference_signal.len(),
                reference_signal.sample_rate()
            );

            let (fingerprint, expected) =
                fingerprint_signal(&reference_signal, num_bands, hex_prefix_len)?;
            let result = huella_core::authenticate(
                &reference_signal,
                &candidate_signal,
                &expected,
                threshold_pct,
            )?;

            println!("Fingerprint: {}", fingerprint.to_hex());
            println!("Match:       {:.2}%", result.match_pct);
            println!("Verdict:     {}", result.verdict);
            if result.verdict == Verdict::Tampered {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
