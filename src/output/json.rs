use super::{Formatter, iso8601_timestamp};
use crate::signal_processing::SignalStats;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, stats: &SignalStats) -> String {
        serde_json::json!({
            "ts": iso8601_timestamp(),
            "kind": stats.kind,
            "samples": stats.samples,
            "rms": stats.rms,
            "peak": stats.peak,
        })
        .to_string()
    }
}
