use rustfft::{FftPlanner, num_complex::Complex};

/// Magnitude of every bin of the forward DFT
pub fn dft_magnitudes(signal: &[f64]) -> Vec<f64> {
    let mut buffer: Vec<Complex<f64>> = signal.iter().map(|&x| Complex::new(x, 0.0)).collect();
    let mut planner = FftPlanner::<f64>::new();
    planner.plan_fft_forward(buffer.len()).process(&mut buffer);
    buffer.iter().map(|c| c.norm()).collect()
}

/// Absolute frequency of bin `k` in an `n`-point DFT
pub fn bin_frequency(k: usize, n: usize, sample_rate: f64) -> f64 {
    let k = if k <= (n - 1) / 2 {
        k as f64
    } else {
        k as f64 - n as f64
    };
    (k * sample_rate / n as f64).abs()
}

/// Fraction of total spectral energy inside `[low, high]` Hz
pub fn band_energy_fraction(signal: &[f64], sample_rate: f64, low: f64, high: f64) -> f64 {
    let n = signal.len();
    let mags = dft_magnitudes(signal);
    let total: f64 = mags.iter().map(|m| m * m).sum();
    let inside: f64 = mags
        .iter()
        .enumerate()
        .filter(|(k, _)| {
            let f = bin_frequency(*k, n, sample_rate);
            f >= low && f <= high
        })
        .map(|(_, m)| m * m)
        .sum();
    if total == 0.0 { 0.0 } else { inside / total }
}
