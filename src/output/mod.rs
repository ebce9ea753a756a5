mod csv;
mod json;
mod text;

use chrono::Utc;

use crate::config::GeneratorConfig;
use crate::signal_processing::SignalStats;

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::text::TextFormatter;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

pub trait Formatter: Send {
    fn format(&self, stats: &SignalStats) -> String;

    fn header(&self) -> Option<&'static str> {
        None
    }
}

pub fn create_formatter(format: OutputFormat, verbose: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(verbose)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}

/// One-line description of the shared generator settings
pub fn summary_banner(config: &GeneratorConfig) -> String {
    let seed = config
        .seed
        .map_or("random".to_string(), |s| s.to_string());
    format!(
        "Sample rate: {} Hz, duration: {:.3} s, samples: {}, seed: {}",
        config.sample_rate,
        config.duration,
        config.sample_count(),
        seed
    )
}

pub fn iso8601_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::SignalKind;

    fn stats() -> SignalStats {
        SignalStats {
            kind: SignalKind::Broadband,
            samples: 44100,
            rms: 0.1234,
            peak: 0.5,
        }
    }

    #[test]
    fn test_summary_banner() {
        let banner = summary_banner(&GeneratorConfig::new(44100, 1.0).with_seed(5));
        assert_eq!(
            banner,
            "Sample rate: 44100 Hz, duration: 1.000 s, samples: 44100, seed: 5"
        );
        assert!(summary_banner(&GeneratorConfig::default()).ends_with("seed: random"));
    }

    #[test]
    fn test_text_formatter() {
        let line = TextFormatter::new(false).format(&stats());
        assert_eq!(line, "broadband  samples: 44100  RMS: 0.1234  peak: 0.5000");
    }

    #[test]
    fn test_json_formatter_fields() {
        let line = JsonFormatter.format(&stats());
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["kind"], "broadband");
        assert_eq!(value["samples"], 44100);
        assert_eq!(value["peak"], 0.5);
        assert!(value["ts"].is_string());
    }

    #[test]
    fn test_csv_formatter_matches_header() {
        let formatter = CsvFormatter;
        let header_cols = formatter.header().unwrap().split(',').count();
        let row_cols = formatter.format(&stats()).split(',').count();
        assert_eq!(header_cols, row_cols);
    }
}
