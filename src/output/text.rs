use super::Formatter;
use crate::signal_processing::SignalStats;

pub struct TextFormatter {
    verbose: bool,
}

impl TextFormatter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, stats: &SignalStats) -> String {
        if self.verbose {
            let crest_db = if stats.rms > 0.0 {
                format!("{:.1} dB", 20.0 * (stats.peak / stats.rms).log10())
            } else {
                "-".to_string()
            };
            format!(
                "{:<10} samples: {}  RMS: {:.4}  peak: {:.4}  crest: {}",
                stats.kind.label(),
                stats.samples,
                stats.rms,
                stats.peak,
                crest_db
            )
        } else {
            format!(
                "{:<10} samples: {}  RMS: {:.4}  peak: {:.4}",
                stats.kind.label(),
                stats.samples,
                stats.rms,
                stats.peak
            )
        }
    }
}
