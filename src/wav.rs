use std::path::Path;

use hound::{WavSpec, WavWriter};

use crate::error::Result;

/// Write a mono 32-bit float WAV file
pub fn save_wav(path: impl AsRef<Path>, samples: &[f64], sample_rate: u32) -> Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path.as_ref(), spec)?;

    for &sample in samples {
        writer.write_sample(sample as f32)?;
    }

    writer.finalize()?;
    log::debug!(
        "Wrote {} samples at {} Hz to {}",
        samples.len(),
        sample_rate,
        path.as_ref().display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_wav_roundtrip_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ping.wav");
        let samples = vec![0.0, 1.0, 1.0, 0.0, -0.5];

        save_wav(&path, &samples, 8000).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.spec().channels, 1);
        assert_eq!(reader.spec().sample_rate, 8000);
        assert_eq!(reader.len(), 5);
    }

    #[test]
    fn test_save_wav_keeps_out_of_range_samples() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loud.wav");

        save_wav(&path, &[1.5, -2.25, 0.1], 8000).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        let samples: Vec<f32> = reader.samples::<f32>().map(|s| s.unwrap()).collect();
        assert_eq!(samples, vec![1.5, -2.25, 0.1f64 as f32]);
    }
}
