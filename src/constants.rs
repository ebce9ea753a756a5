//! Default parameters for the synthetic signal set
//!
//! Generator defaults follow CD-quality audio. The tonal, broadband and
//! impulse defaults describe a generic machinery tone, ambient sea noise
//! and a short transient respectively.

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Default signal duration in seconds.
pub const DEFAULT_DURATION_SECS: f64 = 1.0;

pub const DEFAULT_TONAL_FREQUENCY_HZ: f64 = 1000.0;
pub const DEFAULT_TONAL_NOISE_LEVEL: f64 = 0.1;

/// Blade-rate tone used by the demo scene (submarine machinery).
pub const DEMO_TONAL_FREQUENCY_HZ: f64 = 127.0;

pub const DEFAULT_BROADBAND_LOW_HZ: f64 = 100.0;
pub const DEFAULT_BROADBAND_HIGH_HZ: f64 = 5000.0;
pub const DEFAULT_BROADBAND_NOISE_LEVEL: f64 = 0.3;

/// Impulse centre as a fraction of the duration.
pub const DEFAULT_IMPULSE_POSITION: f64 = 0.5;
/// Impulse half-width as a fraction of the duration.
pub const DEFAULT_IMPULSE_WIDTH: f64 = 0.01;

/// Leading portion of the signals shown in the plot, in seconds.
pub const DEFAULT_PLOT_WINDOW_SECS: f64 = 0.05;
pub const DEFAULT_PLOT_OUTPUT: &str = "acoustic_analysis.png";

/// Plot canvas: 10x8 inches at 150 DPI.
pub const PLOT_WIDTH_PX: u32 = 1500;
pub const PLOT_HEIGHT_PX: u32 = 1200;
