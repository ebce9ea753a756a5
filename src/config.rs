//! Configuration for the hydrosynth signal set.
//!
//! `GeneratorConfig` fixes the sample rate, duration and optional seed shared
//! by every signal. The parameter blocks (`TonalParams`, `BroadbandParams`,
//! `ImpulseParams`) describe a single generation call each.
//!
//! A whole scene can be described in TOML:
//!
//! ```toml
//! [generator]
//! sample_rate = 44100
//! duration = 1.0
//! seed = 42
//!
//! [tonal]
//! frequency = 127.0
//!
//! [plot]
//! window_secs = 0.05
//! output = "acoustic_analysis.png"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::constants::*;
use crate::error::{Result, SignalError};

/// Sample rate, duration and randomness source shared by all signals
///
/// # Example
/// ```
/// use hydrosynth::config::GeneratorConfig;
///
/// let config = GeneratorConfig::new(44100, 2.0).with_seed(7);
/// assert_eq!(config.sample_count(), 88200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Samples per second
    pub sample_rate: u32,
    /// Signal length in seconds
    pub duration: f64,
    /// Fixed seed for reproducible noise; `None` draws fresh OS entropy per call
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    pub fn new(sample_rate: u32, duration: f64) -> Self {
        Self {
            sample_rate,
            duration,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// `round(sample_rate * duration)`
    pub fn sample_count(&self) -> usize {
        let count = (self.sample_rate as f64 * self.duration).round();
        if count.is_finite() && count > 0.0 {
            count as usize
        } else {
            0
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(SignalError::InvalidConfiguration(
                "sample rate must be positive".to_string(),
            ));
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(SignalError::InvalidConfiguration(format!(
                "duration must be positive and finite, got {}",
                self.duration
            )));
        }
        if self.sample_count() == 0 {
            return Err(SignalError::InvalidConfiguration(format!(
                "{} s at {} Hz yields no samples",
                self.duration, self.sample_rate
            )));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE, DEFAULT_DURATION_SECS)
    }
}

fn require_non_negative(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(SignalError::InvalidRange(format!(
            "{} must be non-negative and finite, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Tonal signal parameters
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TonalParams {
    /// Tone frequency in Hz. Values at or above Nyquist alias silently.
    pub frequency: f64,
    /// Standard deviation of the additive Gaussian noise
    pub noise_level: f64,
}

impl TonalParams {
    pub fn validate(&self) -> Result<()> {
        require_non_negative("frequency", self.frequency)?;
        require_non_negative("noise level", self.noise_level)
    }
}

impl Default for TonalParams {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_TONAL_FREQUENCY_HZ,
            noise_level: DEFAULT_TONAL_NOISE_LEVEL,
        }
    }
}

/// Band-limited noise parameters
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct BroadbandParams {
    /// Lower band edge in Hz (inclusive)
    pub low_freq: f64,
    /// Upper band edge in Hz (inclusive)
    pub high_freq: f64,
    /// Output gain applied after filtering
    pub noise_level: f64,
}

impl BroadbandParams {
    pub fn validate(&self) -> Result<()> {
        require_non_negative("low frequency", self.low_freq)?;
        if !self.high_freq.is_finite() {
            return Err(SignalError::InvalidRange(format!(
                "high frequency must be finite, got {}",
                self.high_freq
            )));
        }
        if self.low_freq >= self.high_freq {
            return Err(SignalError::InvalidRange(format!(
                "low frequency {} Hz must be below high frequency {} Hz",
                self.low_freq, self.high_freq
            )));
        }
        require_non_negative("noise level", self.noise_level)
    }
}

impl Default for BroadbandParams {
    fn default() -> Self {
        Self {
            low_freq: DEFAULT_BROADBAND_LOW_HZ,
            high_freq: DEFAULT_BROADBAND_HIGH_HZ,
            noise_level: DEFAULT_BROADBAND_NOISE_LEVEL,
        }
    }
}

/// Rectangular pulse parameters, both as fractions of the duration
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImpulseParams {
    /// Pulse centre in `[0, 1]`
    pub position: f64,
    /// Half-width of the pulse; the pulse spans twice this
    pub width: f64,
}

impl ImpulseParams {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.position) {
            return Err(SignalError::InvalidRange(format!(
                "impulse position must lie in [0, 1], got {}",
                self.position
            )));
        }
        require_non_negative("impulse width", self.width)
    }
}

impl Default for ImpulseParams {
    fn default() -> Self {
        Self {
            position: DEFAULT_IMPULSE_POSITION,
            width: DEFAULT_IMPULSE_WIDTH,
        }
    }
}

/// Plot window and destination
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Leading seconds of each signal to draw
    pub window_secs: f64,
    /// Output path; `.svg` selects vector output, anything else PNG
    pub output: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            window_secs: DEFAULT_PLOT_WINDOW_SECS,
            output: DEFAULT_PLOT_OUTPUT.to_string(),
        }
    }
}

/// Complete description of a demo run
///
/// Missing sections take the demo defaults. The demo tone is the 127 Hz
/// machinery line rather than the generic 1 kHz `TonalParams` default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub generator: GeneratorConfig,
    pub tonal: TonalParams,
    pub broadband: BroadbandParams,
    pub impulse: ImpulseParams,
    pub plot: PlotConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            tonal: TonalParams {
                frequency: DEMO_TONAL_FREQUENCY_HZ,
                ..TonalParams::default()
            },
            broadband: BroadbandParams::default(),
            impulse: ImpulseParams::default(),
            plot: PlotConfig::default(),
        }
    }
}

impl SceneConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SignalError::ConfigFile(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Validate every section up front so generation never fails midway
    pub fn validate(&self) -> Result<()> {
        self.generator.validate()?;
        self.tonal.validate()?;
        self.broadband.validate()?;
        self.impulse.validate()?;
        if !self.plot.window_secs.is_finite() || self.plot.window_secs <= 0.0 {
            return Err(SignalError::InvalidRange(format!(
                "plot window must be positive, got {}",
                self.plot.window_secs
            )));
        }
        Ok(())
    }
}
