//! Synthetic underwater acoustic signals.
//!
//! A [`SignalGenerator`] owns an immutable [`GeneratorConfig`] and the time
//! axis derived from it. Each generation call returns a fresh sample vector
//! aligned index-for-index with that axis.
//!
//! Noise is drawn from a ChaCha8 stream. With a seed in the config every call
//! starts from the same stream, so repeated calls return identical samples.
//! Without one every call is seeded from OS entropy. Callers needing a
//! different policy can pass their own RNG to the `*_with_rng` variants.

use std::f64::consts::PI;
use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::config::{BroadbandParams, GeneratorConfig, ImpulseParams, TonalParams};
use crate::error::Result;
use crate::signal_processing::spectrum;

/// The three families of test signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    /// Narrowband tone, e.g. machinery or a marine mammal
    Tonal,
    /// Band-limited noise, e.g. waves or rain
    Broadband,
    /// Short rectangular transient, e.g. a ping or snapping shrimp
    Impulse,
}

impl SignalKind {
    pub fn label(&self) -> &'static str {
        match self {
            SignalKind::Tonal => "tonal",
            SignalKind::Broadband => "broadband",
            SignalKind::Impulse => "impulse",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => rand::make_rng(),
    }
}

/// `n` evenly spaced points covering `[0, duration]` inclusive
fn linspace(duration: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![0.0];
    }
    let step = duration / (n - 1) as f64;
    let mut time: Vec<f64> = (0..n).map(|i| i as f64 * step).collect();
    if let Some(last) = time.last_mut() {
        *last = duration;
    }
    time
}

/// Generator for tonal, broadband and impulse signals
///
/// # Example
/// ```
/// use hydrosynth::config::GeneratorConfig;
/// use hydrosynth::SignalGenerator;
///
/// let generator = SignalGenerator::new(GeneratorConfig::new(8000, 0.5).with_seed(1)).unwrap();
/// let ping = generator.impulse(0.5, 0.01).unwrap();
/// assert_eq!(ping.len(), generator.sample_count());
/// ```
#[derive(Debug, Clone)]
pub struct SignalGenerator {
    config: GeneratorConfig,
    time: Vec<f64>,
}

impl SignalGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;

        let n = config.sample_count();
        let time = linspace(config.duration, n);

        log::debug!(
            "Signal generator: {} Hz, {:.3} s, {} samples, seed {:?}",
            config.sample_rate,
            config.duration,
            n,
            config.seed
        );

        Ok(Self { config, time })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn sample_rate(&self) -> u32 {
        self.config.sample_rate
    }

    pub fn duration(&self) -> f64 {
        self.config.duration
    }

    pub fn seed(&self) -> Option<u64> {
        self.config.seed
    }

    pub fn sample_count(&self) -> usize {
        self.time.len()
    }

    /// Shared time axis in seconds
    pub fn time_axis(&self) -> &[f64] {
        &self.time
    }

    /// `sin(2π f t) + noise_level · N(0, 1)` per sample
    pub fn tonal(&self, frequency: f64, noise_level: f64) -> Result<Vec<f64>> {
        let mut rng = create_rng(self.config.seed);
        self.tonal_with_rng(frequency, noise_level, &mut rng)
    }

    pub fn tonal_with_rng<R: Rng + ?Sized>(
        &self,
        frequency: f64,
        noise_level: f64,
        rng: &mut R,
    ) -> Result<Vec<f64>> {
        TonalParams {
            frequency,
            noise_level,
        }
        .validate()?;

        let nyquist = self.config.sample_rate as f64 / 2.0;
        if frequency >= nyquist {
            log::debug!(
                "Tonal {:.1} Hz is at or above Nyquist ({:.1} Hz) and will alias",
                frequency,
                nyquist
            );
        }

        let omega = 2.0 * PI * frequency;
        let signal = self
            .time
            .iter()
            .map(|&t| {
                let noise: f64 = StandardNormal.sample(rng);
                (omega * t).sin() + noise_level * noise
            })
            .collect();

        log::debug!("Generated tonal: {:.1} Hz, noise {:.3}", frequency, noise_level);
        Ok(signal)
    }

    /// Gaussian noise band-limited to `[low_freq, high_freq]` by zeroing DFT bins
    ///
    /// Band edges are quantised to the bin resolution `sample_rate / n`. If no
    /// bin falls inside the band the result is all zeros.
    pub fn broadband(&self, low_freq: f64, high_freq: f64, noise_level: f64) -> Result<Vec<f64>> {
        let mut rng = create_rng(self.config.seed);
        self.broadband_with_rng(low_freq, high_freq, noise_level, &mut rng)
    }

    pub fn broadband_with_rng<R: Rng + ?Sized>(
        &self,
        low_freq: f64,
        high_freq: f64,
        noise_level: f64,
        rng: &mut R,
    ) -> Result<Vec<f64>> {
        BroadbandParams {
            low_freq,
            high_freq,
            noise_level,
        }
        .validate()?;

        let n = self.sample_count();
        let white: Vec<f64> = (0..n).map(|_| StandardNormal.sample(rng)).collect();

        let mut bins = spectrum::forward(&white);
        let freqs = spectrum::fft_frequencies(n, self.config.sample_rate as f64);
        let kept = spectrum::band_limit(&mut bins, &freqs, low_freq, high_freq);

        if kept == 0 {
            log::warn!(
                "No DFT bins inside {:.1}-{:.1} Hz (resolution {:.3} Hz), broadband is silent",
                low_freq,
                high_freq,
                spectrum::bin_resolution(n, self.config.sample_rate as f64)
            );
            return Ok(vec![0.0; n]);
        }

        let signal = spectrum::inverse_real(bins)
            .into_iter()
            .map(|x| x * noise_level)
            .collect();

        log::debug!(
            "Generated broadband: {:.1}-{:.1} Hz, {} of {} bins kept, gain {:.3}",
            low_freq,
            high_freq,
            kept,
            n,
            noise_level
        );
        Ok(signal)
    }

    /// Unit rectangular pulse over `[centre - half, centre + half)` samples
    ///
    /// `centre = round(position · n)` and `half = round(width · n)`. Indices
    /// falling outside the signal are skipped, so a pulse near either end is
    /// truncated and one that misses entirely leaves the signal all zeros.
    pub fn impulse(&self, position: f64, width: f64) -> Result<Vec<f64>> {
        ImpulseParams { position, width }.validate()?;

        let n = self.sample_count();
        let mut signal = vec![0.0; n];

        let centre = (position * n as f64).round() as i64;
        let half = (width * n as f64).round() as i64;
        let start = centre.saturating_sub(half).max(0);
        let end = centre.saturating_add(half).min(n as i64);

        if start < end {
            signal[start as usize..end as usize].fill(1.0);
        } else {
            log::debug!("Impulse range [{}, {}) is empty after clipping", start, end);
        }

        Ok(signal)
    }

    pub fn generate_tonal(&self, params: &TonalParams) -> Result<Vec<f64>> {
        self.tonal(params.frequency, params.noise_level)
    }

    pub fn generate_broadband(&self, params: &BroadbandParams) -> Result<Vec<f64>> {
        self.broadband(params.low_freq, params.high_freq, params.noise_level)
    }

    pub fn generate_impulse(&self, params: &ImpulseParams) -> Result<Vec<f64>> {
        self.impulse(params.position, params.width)
    }
}
