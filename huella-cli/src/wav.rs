use std::error::Error;
use std::path::Path;

use huella_core::Signal;

/// Read a WAV file as a mono f32 signal.
///
/// Integer formats are normalized to [-1, 1]. Multi-channel input keeps only
/// the first channel, with a warning.
pub fn read_wav_mono(path: &Path) -> Result<Signal, Box<dyn Error>> {
    let reader = hound::WavReader::open(path)?;
    let spec = reader.spec();

    if spec.channels != 1 {
        eprintln!(
            "Warning: input has {} channels, only the first channel will be used.",
            spec.channels
        );
    }

    let mut samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<Result<Vec<f32>, _>>()?,
        hound::SampleFormat::Int => {
            let bits = spec.bits_per_sample;
            let max = (1i32 << (bits - 1)) as f32;
            reader
                .into_samples::<i32>()
                .collect::<Result<Vec<i32>, _>>()?
                .into_iter()
                .map(|s| s as f32 / max)
                .collect()
        }
    };

    if spec.channels > 1 {
        samples = samples
            .chunks(spec.channels as usize)
            .map(|c| c[0])
            .collect();
    }

    Ok(Signal::new(samples, spec.sample_rate))
}

/// Write a signal to a WAV file as mono 32-bit float.
pub fn write_wav_f32(path: &Path, signal: &Signal) -> Result<(), Box<dyn Error>> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: signal.sample_rate(),
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for &s in signal.samples() {
        writer.write_sample(s)?;
    }
    writer.finalize()?;
    Ok(())
}
