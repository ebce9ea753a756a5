use super::{Formatter, iso8601_timestamp};
use crate::signal_processing::SignalStats;

pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, stats: &SignalStats) -> String {
        format!(
            "{},{},{},{:.6},{:.6}",
            iso8601_timestamp(),
            stats.kind.label(),
            stats.samples,
            stats.rms,
            stats.peak
        )
    }

    fn header(&self) -> Option<&'static str> {
        Some("ts,kind,samples,rms,peak")
    }
}
