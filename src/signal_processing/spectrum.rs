//! Forward/inverse DFT helpers for frequency-domain band limiting.
//!
//! Bin frequencies follow the usual real-signal layout: bins `0..=(n-1)/2`
//! carry non-negative frequencies, the remainder carry the negative ones in
//! ascending order. For even `n` the Nyquist bin is reported as `-fs/2`.

use num_complex::Complex;
use rustfft::FftPlanner;

/// Frequency spacing between adjacent bins in Hz
pub fn bin_resolution(n: usize, sample_rate: f64) -> f64 {
    if n == 0 {
        return 0.0;
    }
    sample_rate / n as f64
}

/// Signed centre frequency of every bin of an `n`-point DFT
pub fn fft_frequencies(n: usize, sample_rate: f64) -> Vec<f64> {
    let df = bin_resolution(n, sample_rate);
    let positive = (n.saturating_sub(1)) / 2 + 1;

    (0..n)
        .map(|k| {
            if k < positive {
                k as f64 * df
            } else {
                (k as f64 - n as f64) * df
            }
        })
        .collect()
}

/// Forward DFT of a real signal
pub fn forward(signal: &[f64]) -> Vec<Complex<f64>> {
    let mut buffer: Vec<Complex<f64>> = signal.iter().map(|&x| Complex::new(x, 0.0)).collect();
    if buffer.is_empty() {
        return buffer;
    }

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(buffer.len());
    fft.process(&mut buffer);
    buffer
}

/// Inverse DFT normalised by `1/n`, keeping only the real part
pub fn inverse_real(mut spectrum: Vec<Complex<f64>>) -> Vec<f64> {
    let n = spectrum.len();
    if n == 0 {
        return Vec::new();
    }

    let mut planner = FftPlanner::<f64>::new();
    let ifft = planner.plan_fft_inverse(n);
    ifft.process(&mut spectrum);

    let scale = 1.0 / n as f64;
    spectrum.iter().map(|c| c.re * scale).collect()
}

/// Zero every bin whose `|frequency|` lies outside `[low_hz, high_hz]`.
///
/// The mask depends only on `|frequency|`, so a Hermitian spectrum stays
/// Hermitian. Returns the number of surviving bins.
pub fn band_limit(
    spectrum: &mut [Complex<f64>],
    freqs: &[f64],
    low_hz: f64,
    high_hz: f64,
) -> usize {
    let mut kept = 0;
    for (bin, &f) in spectrum.iter_mut().zip(freqs) {
        let magnitude = f.abs();
        if magnitude < low_hz || magnitude > high_hz {
            *bin = Complex::new(0.0, 0.0);
        } else {
            kept += 1;
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_fft_frequencies_even() {
        let freqs = fft_frequencies(8, 8.0);
        assert_eq!(freqs, vec![0.0, 1.0, 2.0, 3.0, -4.0, -3.0, -2.0, -1.0]);
    }

    #[test]
    fn test_fft_frequencies_odd() {
        let freqs = fft_frequencies(5, 10.0);
        assert_eq!(freqs, vec![0.0, 2.0, 4.0, -4.0, -2.0]);
    }

    #[test]
    fn test_fft_frequencies_degenerate() {
        assert!(fft_frequencies(0, 44100.0).is_empty());
        assert_eq!(fft_frequencies(1, 44100.0), vec![0.0]);
    }

    #[test]
    fn test_forward_locates_tone() {
        let n = 64;
        let fs = 64.0;
        let tone: Vec<f64> = (0..n)
            .map(|i| (2.0 * PI * 5.0 * i as f64 / fs).cos())
            .collect();

        let spectrum = forward(&tone);
        assert_abs_diff_eq!(spectrum[5].norm(), n as f64 / 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(spectrum[n - 5].norm(), n as f64 / 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(spectrum[6].norm(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_inverse_undoes_forward() {
        let signal = vec![0.5, -1.25, 3.0, 0.0, 2.5, -0.75, 1.0];
        let restored = inverse_real(forward(&signal));
        for (a, b) in signal.iter().zip(&restored) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_band_limit_keeps_symmetric_bins() {
        let freqs = fft_frequencies(8, 8.0);
        let mut spectrum = vec![Complex::new(1.0, 0.0); 8];

        let kept = band_limit(&mut spectrum, &freqs, 1.0, 2.0);

        assert_eq!(kept, 4);
        let survivors: Vec<usize> = spectrum
            .iter()
            .enumerate()
            .filter(|(_, c)| c.norm() > 0.0)
            .map(|(k, _)| k)
            .collect();
        assert_eq!(survivors, vec![1, 2, 6, 7]);
    }
}
