use crate::generator::SignalKind;

/// Root-mean-square amplitude, `sqrt(mean(x^2))`
pub fn rms(signal: &[f64]) -> f64 {
    if signal.is_empty() {
        return 0.0;
    }
    (signal.iter().map(|&x| x * x).sum::<f64>() / signal.len() as f64).sqrt()
}

/// Largest absolute sample value
pub fn peak(signal: &[f64]) -> f64 {
    signal.iter().fold(0.0f64, |a, &b| a.max(b.abs()))
}

/// Summary figures reported for each generated signal
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct SignalStats {
    pub kind: SignalKind,
    pub samples: usize,
    pub rms: f64,
    pub peak: f64,
}

impl SignalStats {
    pub fn measure(kind: SignalKind, signal: &[f64]) -> Self {
        Self {
            kind,
            samples: signal.len(),
            rms: rms(signal),
            peak: peak(signal),
        }
    }
}
